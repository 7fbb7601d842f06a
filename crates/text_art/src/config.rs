//! Render parameters and their TOML representation.
//!
//! ```toml
//! block_width = 6
//! block_height = 10
//! font_size = 10
//! mode = "monochrome"
//! background = "#fdf6e3"
//! display_text = "HELLO"
//! ramp = "@%#*+=-:. "
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::ascii::gradient::Gradient;
use crate::color::Rgb;
use crate::image_pipeline::block::BlockSize;
use crate::TextArtError;

/// Text used in color mode when none is supplied.
pub const DEFAULT_DISPLAY_TEXT: &str = "ASCII";

/// How glyphs are chosen and colored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Cycle through the display text, coloring each glyph with its block's average.
    #[default]
    Color,
    /// Pick a ramp glyph by block luminance and draw it in black.
    Monochrome,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Color => DisplayMode::Monochrome,
            DisplayMode::Monochrome => DisplayMode::Color,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderParams {
    /// Source pixels per cell horizontally.
    pub block_width: u32,
    /// Source pixels per cell vertically.
    pub block_height: u32,
    /// Font size in points; also the baseline offset of every glyph.
    pub font_size: u32,
    pub mode: DisplayMode,
    pub background: Rgb,
    /// Characters cycled through in color mode.
    pub display_text: String,
    /// Glyph ramp used in monochrome mode.
    pub ramp: Gradient,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            block_width: 6,
            block_height: 10,
            font_size: 10,
            mode: DisplayMode::Color,
            background: Rgb::WHITE,
            display_text: DEFAULT_DISPLAY_TEXT.to_owned(),
            ramp: Gradient::monochrome(),
        }
    }
}

impl RenderParams {
    pub fn block(&self) -> BlockSize {
        BlockSize::new(self.block_width, self.block_height)
    }

    /// Load parameters from a TOML file; missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TextArtError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| TextArtError::Io { path: path.to_path_buf(), source })?;
        let params = toml::from_str(&content)
            .map_err(|source| TextArtError::Config { path: path.to_path_buf(), source })?;
        debug!("loaded render parameters from {}", path.display());
        Ok(params)
    }
}

/// A partial change to [`RenderParams`]; `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamsUpdate {
    pub block_width: Option<u32>,
    pub block_height: Option<u32>,
    pub font_size: Option<u32>,
    pub mode: Option<DisplayMode>,
    pub background: Option<Rgb>,
    pub display_text: Option<String>,
    pub ramp: Option<Gradient>,
}

impl ParamsUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Write the present fields into `params`.
    ///
    /// Returns whether the block size changed, in which case the grid has to
    /// be recomputed before rendering again.
    pub fn apply(self, params: &mut RenderParams) -> bool {
        let previous_block = params.block();

        if let Some(block_width) = self.block_width {
            params.block_width = block_width;
        }
        if let Some(block_height) = self.block_height {
            params.block_height = block_height;
        }
        if let Some(font_size) = self.font_size {
            params.font_size = font_size;
        }
        if let Some(mode) = self.mode {
            params.mode = mode;
        }
        if let Some(background) = self.background {
            params.background = background;
        }
        if let Some(display_text) = self.display_text {
            params.display_text = display_text;
        }
        if let Some(ramp) = self.ramp {
            params.ramp = ramp;
        }

        params.block() != previous_block
    }
}
