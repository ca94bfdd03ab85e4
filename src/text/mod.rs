//! Text meshes: font loading, layout, and delivery to the scene.
//!
//! The font file is the one asset this program loads, and the only
//! asynchronous operation. A worker thread parses the font and builds one
//! extruded mesh per text entry; the finished objects arrive on an mpsc
//! channel that the render loop drains before each frame. If the load fails
//! the channel never delivers and the scene simply keeps rendering without
//! text: no retry, no fallback.

pub mod extrude;
pub mod outline;

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{Context, Result};
use glam::Vec3;
use lyon::path::Path;

use crate::scene::{Material, Scene, SceneObject};
use outline::OutlineSink;

/// Extrusion depth of the text meshes, world units.
pub const EXTRUSION_DEPTH: f32 = 0.01;

/// Curve quality knob; higher means smoother glyph curves.
pub const CURVE_SEGMENTS: u32 = 7;

/// Baseline-to-baseline advance for multi-line entries, in multiples of the
/// entry's font size.
pub const LINE_HEIGHT: f32 = 1.2;

/// One line block of extruded text: content, glyph size (world units), and
/// the world position of the first line's baseline origin.
#[derive(Clone, Debug)]
pub struct TextEntry {
    pub text: String,
    pub size: f32,
    pub position: Vec3,
}

impl TextEntry {
    pub fn new(text: &str, size: f32, position: [f32; 3]) -> Self {
        Self {
            text: text.to_string(),
            size,
            position: Vec3::from_array(position),
        }
    }
}

/// The portfolio card's text, as displayed.
pub fn portfolio_entries() -> Vec<TextEntry> {
    vec![
        TextEntry::new("Martin Rouault", 0.1, [-0.8, 0.25, 0.0]),
        TextEntry::new("Web Developer", 0.06, [-0.8, 0.1, 0.0]),
        TextEntry::new("Paris, France", 0.045, [0.5, 0.3, 0.0]),
        TextEntry::new(
            "If you no longer for a gap that exists \n you are no longer a racing driver.",
            0.03,
            [-0.8, -0.35, 0.0],
        ),
    ]
}

/// Tessellation tolerance for a glyph of the given size: finer for larger
/// glyphs, scaled by the curve-segment quality knob.
pub fn tolerance_for(size: f32) -> f32 {
    size * 0.5 / (CURVE_SEGMENTS * CURVE_SEGMENTS) as f32
}

/// Replay a finished glyph path into the entry-wide builder, so each entry
/// tessellates as one mesh.
fn append_path(builder: &mut lyon::path::Builder, path: &Path) {
    use lyon::path::Event;
    for event in path.iter() {
        match event {
            Event::Begin { at } => {
                builder.begin(at);
            }
            Event::Line { to, .. } => {
                builder.line_to(to);
            }
            Event::Quadratic { ctrl, to, .. } => {
                builder.quadratic_bezier_to(ctrl, to);
            }
            Event::Cubic { ctrl1, ctrl2, to, .. } => {
                builder.cubic_bezier_to(ctrl1, ctrl2, to);
            }
            Event::End { close, .. } => builder.end(close),
        }
    }
}

/// Lay out one entry against a parsed face and produce a single outline
/// path covering every glyph of every line.
fn layout_entry(face: &ttf_parser::Face, entry: &TextEntry) -> Path {
    let units_per_em = face.units_per_em() as f32;
    let scale = entry.size / units_per_em;
    // Fallback advance for characters the font has no glyph for.
    let missing_advance = units_per_em / 3.0;

    let mut builder = Path::builder();
    for (line_index, line) in entry.text.split('\n').enumerate() {
        let pen_y = -(line_index as f32) * entry.size * LINE_HEIGHT;
        let mut pen_x = 0.0f32;

        for ch in line.chars() {
            match face.glyph_index(ch) {
                Some(glyph) => {
                    let mut sink = OutlineSink::new(scale, pen_x, pen_y);
                    if face.outline_glyph(glyph, &mut sink).is_some() {
                        append_path(&mut builder, &sink.finish());
                    }
                    let advance = face.glyph_hor_advance(glyph).unwrap_or(0) as f32;
                    pen_x += advance * scale;
                }
                None => pen_x += missing_advance * scale,
            }
        }
    }
    builder.build()
}

/// Build the extruded mesh object for one text entry.
pub fn build_text_object(face: &ttf_parser::Face, entry: &TextEntry) -> Result<SceneObject> {
    let path = layout_entry(face, entry);
    let flat = extrude::tessellate(&path, tolerance_for(entry.size))
        .with_context(|| format!("tessellating text entry {:?}", entry.text))?;
    let mesh = extrude::extrude(&flat, EXTRUSION_DEPTH);

    Ok(SceneObject {
        mesh,
        material: Material::with_color([1.0, 1.0, 1.0]),
        position: entry.position,
    })
}

/// Read and parse the font, then build every entry's mesh.
fn load(font_path: &std::path::Path, entries: &[TextEntry]) -> Result<Vec<SceneObject>> {
    let data = std::fs::read(font_path)
        .with_context(|| format!("reading font file {}", font_path.display()))?;
    let face = ttf_parser::Face::parse(&data, 0)
        .with_context(|| format!("parsing font file {}", font_path.display()))?;

    entries
        .iter()
        .map(|entry| build_text_object(&face, entry))
        .collect()
}

/// Spawn the font worker. The returned receiver yields exactly one batch of
/// finished objects on success; on failure the sender is dropped without
/// sending and a warning is logged.
pub fn spawn_loader(font_path: PathBuf, entries: Vec<TextEntry>) -> Receiver<Vec<SceneObject>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || match load(&font_path, &entries) {
        Ok(objects) => {
            log::info!(
                "font loaded: {} text meshes from {}",
                objects.len(),
                font_path.display()
            );
            // Receiver may be gone if the app exited during the load.
            let _ = tx.send(objects);
        }
        Err(e) => log::warn!("font load failed, rendering without text: {e:#}"),
    });
    rx
}

/// Drain the loader channel into the scene. Returns `true` when a batch was
/// appended; afterwards (or when the loader has given up) the receiver slot
/// is cleared so the transition can happen at most once.
pub fn drain_into(rx: &mut Option<Receiver<Vec<SceneObject>>>, scene: &mut Scene) -> bool {
    let Some(receiver) = rx else {
        return false;
    };
    match receiver.try_recv() {
        Ok(objects) => {
            for object in objects {
                scene.add(object);
            }
            *rx = None;
            true
        }
        Err(TryRecvError::Empty) => false,
        Err(TryRecvError::Disconnected) => {
            *rx = None;
            false
        }
    }
}
