use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use super::Surface;
use crate::ascii::command::GlyphCommand;
use crate::color::Rgb;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextStyle {
    /// Characters only.
    #[default]
    Plain,
    /// 24-bit terminal colors, glyph opacity blended into the background.
    Ansi,
}

/// Lays glyphs out one character per cell, starting a new line whenever
/// the glyph baseline moves.
#[derive(Clone, Debug)]
pub struct TextSurface {
    style: TextStyle,
    background: Rgb,
    lines: Vec<Vec<(char, Rgb)>>,
    baseline: Option<u32>,
}

impl TextSurface {
    pub fn new(style: TextStyle) -> Self {
        Self { style, background: Rgb::WHITE, lines: Vec::new(), baseline: None }
    }

    /// Uncolored text of each line.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(|line| line.iter().map(|(ch, _)| *ch).collect())
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            match self.style {
                TextStyle::Plain => {
                    for (ch, _) in line {
                        write!(out, "{ch}")?;
                    }
                },
                TextStyle::Ansi => {
                    queue!(out, SetBackgroundColor(terminal_color(self.background)))?;
                    let mut current = None;
                    for &(ch, color) in line {
                        if current != Some(color) {
                            queue!(out, SetForegroundColor(terminal_color(color)))?;
                            current = Some(color);
                        }
                        queue!(out, Print(ch))?;
                    }
                    queue!(out, ResetColor)?;
                },
            }
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn into_string(self) -> io::Result<String> {
        let mut out = Vec::new();
        self.write_to(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

impl Surface for TextSurface {
    fn fill_background(&mut self, _width: u32, _height: u32, color: Rgb) {
        self.background = color;
        self.lines.clear();
        self.baseline = None;
    }

    fn draw_glyph(&mut self, glyph: &GlyphCommand) {
        if self.baseline != Some(glyph.y) {
            self.lines.push(Vec::new());
            self.baseline = Some(glyph.y);
        }

        let color = glyph.color.blend_over(self.background, glyph.opacity);
        if let Some(line) = self.lines.last_mut() {
            line.push((glyph.ch, color));
        }
    }
}

fn terminal_color(color: Rgb) -> Color {
    Color::Rgb { r: color.r, g: color.g, b: color.b }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::command::DrawCommand;
    use crate::surface::present;

    fn commands() -> Vec<DrawCommand> {
        let glyph = |ch, x, y, opacity| {
            DrawCommand::Glyph(GlyphCommand { ch, x, y, color: Rgb::BLACK, opacity })
        };
        vec![
            DrawCommand::FillBackground { width: 4, height: 4, color: Rgb::WHITE },
            glyph('a', 0, 3, 1.0),
            glyph('b', 2, 3, 1.0),
            glyph('c', 0, 5, 0.0),
            glyph('d', 2, 5, 0.5),
        ]
    }

    #[test]
    fn plain_text_breaks_lines_on_baseline_change() {
        let mut surface = TextSurface::new(TextStyle::Plain);
        present(&commands(), &mut surface);
        assert_eq!(surface.lines().collect::<Vec<_>>(), vec!["ab", "cd"]);
        assert_eq!(surface.into_string().unwrap(), "ab\ncd\n");
    }

    #[test]
    fn background_fill_resets_previous_output() {
        let mut surface = TextSurface::new(TextStyle::Plain);
        present(&commands(), &mut surface);
        present(&commands()[..2], &mut surface);
        assert_eq!(surface.into_string().unwrap(), "a\n");
    }

    #[test]
    fn ansi_blends_opacity_into_background() {
        let mut surface = TextSurface::new(TextStyle::Ansi);
        present(&commands(), &mut surface);
        let output = surface.into_string().unwrap();

        // White background, opaque black, fully transparent, then half gray.
        assert!(output.contains("\x1b[48;2;255;255;255m"));
        assert!(output.contains("\x1b[38;2;0;0;0ma"));
        assert!(output.contains("\x1b[38;2;255;255;255mc"));
        assert!(output.contains("\x1b[38;2;128;128;128md"));
        // Consecutive glyphs of the same color share one escape.
        assert!(output.contains("ab"));
        assert_eq!(output.lines().count(), 2);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_reach_the_caller() {
        for style in [TextStyle::Plain, TextStyle::Ansi] {
            let mut surface = TextSurface::new(style);
            present(&commands(), &mut surface);
            let err = surface.write_to(&mut BrokenPipe).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        }
    }
}
