use super::Surface;
use crate::ascii::command::GlyphCommand;
use crate::color::Rgb;

const DEFAULT_FONT_FAMILY: &str = "Courier";

/// Builds a standalone SVG document from draw commands.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    font_size: u32,
    font_family: String,
    width: u32,
    height: u32,
    body: String,
}

impl SvgSurface {
    pub fn new(font_size: u32) -> Self {
        Self {
            font_size,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            width: 0,
            height: 0,
            body: String::new(),
        }
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn finish(self) -> String {
        format!(
            concat!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" ",
                "viewBox=\"0 0 {w} {h}\" font-family=\"{family}\" font-size=\"{size}pt\" ",
                "xml:space=\"preserve\">\n{body}</svg>\n"
            ),
            w = self.width,
            h = self.height,
            family = escape(&self.font_family),
            size = self.font_size,
            body = self.body,
        )
    }
}

impl Surface for SvgSurface {
    fn fill_background(&mut self, width: u32, height: u32, color: Rgb) {
        self.width = width;
        self.height = height;
        self.body.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"{color}\"/>\n"
        ));
    }

    fn draw_glyph(&mut self, glyph: &GlyphCommand) {
        let mut utf8 = [0; 4];
        self.body.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" fill=\"{}\" fill-opacity=\"{}\">{}</text>\n",
            glyph.x,
            glyph.y,
            glyph.color.to_css(),
            glyph.opacity,
            escape(glyph.ch.encode_utf8(&mut utf8)),
        ));
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
