use crate::color::Rgb;

/// A single character placed on the output canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphCommand {
    pub ch: char,
    /// Left edge in canvas pixels.
    pub x: u32,
    /// Baseline in canvas pixels.
    pub y: u32,
    pub color: Rgb,
    /// Glyph opacity in `[0, 1]`.
    pub opacity: f32,
}

/// Drawing instruction emitted by the renderer for a presentation surface.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole `width` x `height` canvas.
    FillBackground { width: u32, height: u32, color: Rgb },
    Glyph(GlyphCommand),
}

impl DrawCommand {
    pub fn as_glyph(&self) -> Option<&GlyphCommand> {
        match self {
            DrawCommand::Glyph(glyph) => Some(glyph),
            DrawCommand::FillBackground { .. } => None,
        }
    }
}
