use log::{debug, warn};

use super::{
    command::{DrawCommand, GlyphCommand},
    grid::BlockGrid,
};
use crate::color::Rgb;
use crate::config::{DisplayMode, RenderParams};

/// Fill color of every glyph in monochrome mode.
pub const MONOCHROME_INK: Rgb = Rgb::BLACK;

/// Turn a block grid into draw commands: a background fill followed by one
/// glyph per cell, rows top to bottom and columns left to right.
///
/// In color mode the display text is consumed by a single cursor that
/// advances once per cell across the whole grid and wraps at the end of the
/// text; it does not restart on a new row.
pub fn render(grid: &BlockGrid, params: &RenderParams) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(grid.cells().len() + 1);
    commands.push(DrawCommand::FillBackground {
        width: grid.source_width(),
        height: grid.source_height(),
        color: params.background,
    });

    let display: Vec<char> = params.display_text.chars().collect();
    if params.mode == DisplayMode::Color && display.is_empty() {
        warn!("color mode needs a non-empty display text, drawing background only");
        return commands;
    }

    let mut cursor = 0;
    for (row, cells) in (0u32..).zip(grid.rows()) {
        for (column, cell) in (0u32..).zip(cells) {
            let (ch, color) = match params.mode {
                DisplayMode::Color => {
                    let ch = display[cursor];
                    cursor = (cursor + 1) % display.len();
                    (ch, cell.rounded_rgb())
                },
                DisplayMode::Monochrome => {
                    let index = params.ramp.index_for_luminance(cell.luminance());
                    (params.ramp.char_at(index), MONOCHROME_INK)
                },
            };

            commands.push(DrawCommand::Glyph(GlyphCommand {
                ch,
                x: column.saturating_mul(params.block_width),
                y: row.saturating_mul(params.block_height).saturating_add(params.font_size),
                color,
                opacity: cell.opacity(),
            }));
        }
    }

    debug!(
        "rendered {}x{} grid as {} glyphs in {:?} mode",
        grid.width(),
        grid.height(),
        commands.len() - 1,
        params.mode
    );

    commands
}
