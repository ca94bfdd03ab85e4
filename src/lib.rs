pub mod camera;
pub mod cli;
pub mod clock;
pub mod controls;
pub mod geometry;
pub mod renderer;
pub mod scene;
pub mod text;
pub mod viewport;
