mod ascii;
mod color;
mod config;
mod image_pipeline;
mod session;
mod surface;

use std::io;
use std::path::PathBuf;

pub use ascii::{
    command::{DrawCommand, GlyphCommand},
    gradient::Gradient,
    grid::BlockGrid,
    mapping::{render, MONOCHROME_INK},
};
pub use color::{ColorSample, Rgb};
pub use config::{DisplayMode, ParamsUpdate, RenderParams, DEFAULT_DISPLAY_TEXT};
pub use image_pipeline::{
    average::compute_grid,
    block::BlockSize,
    buffer::PixelBuffer,
    loader::{load_bytes, load_path},
};
pub use session::Session;
pub use surface::{
    present,
    svg::SvgSurface,
    text::{TextStyle, TextSurface},
    Surface,
};

#[derive(Debug, thiserror::Error)]
pub enum TextArtError {
    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error("{width}x{height} pixel buffer needs {expected} bytes, got {actual}")]
    BufferSize { width: u32, height: u32, expected: usize, actual: usize },
    #[error("invalid color {0:?}, expected #rrggbb or #rgb")]
    InvalidColor(String),
    #[error("gradient {0:?} needs at least two characters")]
    InvalidGradient(String),
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    Config { path: PathBuf, source: toml::de::Error },
}
