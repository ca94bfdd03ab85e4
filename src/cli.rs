// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "showcard")]
#[command(about = "3D portfolio card viewer", long_about = None)]
pub struct Cli {
    /// TTF/OTF font file used for the extruded text
    #[arg(long = "font", default_value = "fonts/DejaVuSans.ttf")]
    pub font: PathBuf,

    /// Window title
    #[arg(long, default_value = "showcard")]
    pub title: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}
