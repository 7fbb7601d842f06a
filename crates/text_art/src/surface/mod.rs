//! Presentation surfaces that replay renderer output.

pub mod svg;
pub mod text;

use crate::ascii::command::{DrawCommand, GlyphCommand};
use crate::color::Rgb;

/// Something draw commands can be replayed onto.
pub trait Surface {
    fn fill_background(&mut self, width: u32, height: u32, color: Rgb);
    fn draw_glyph(&mut self, glyph: &GlyphCommand);
}

/// Replay `commands` onto `surface` in order.
pub fn present<S: Surface + ?Sized>(commands: &[DrawCommand], surface: &mut S) {
    for command in commands {
        match command {
            DrawCommand::FillBackground { width, height, color } => {
                surface.fill_background(*width, *height, *color)
            },
            DrawCommand::Glyph(glyph) => surface.draw_glyph(glyph),
        }
    }
}
