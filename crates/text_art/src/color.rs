use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TextArtError;

/// ITU-R BT.709 luma coefficients.
const LUMA_RED: f64 = 0.2126;
const LUMA_GREEN: f64 = 0.7152;
const LUMA_BLUE: f64 = 0.0722;

/// 8-bit RGB color, written as `#rrggbb` in configuration files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS functional notation, e.g. `rgb(12, 34, 56)`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Composite this color at `opacity` over an opaque `background`.
    pub fn blend_over(self, background: Rgb, opacity: f32) -> Rgb {
        let opacity = opacity.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| {
            (f32::from(fg) * opacity + f32::from(bg) * (1.0 - opacity)).round() as u8
        };
        Rgb::new(mix(self.r, background.r), mix(self.g, background.g), mix(self.b, background.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = TextArtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TextArtError::InvalidColor(s.to_owned());

        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Rgb::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            // `#abc` is shorthand for `#aabbcc`.
            3 => Ok(Rgb::new(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = TextArtError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// Averaged RGBA value of one pixel block.
///
/// Channels stay unrounded in `[0, 255]` until a consumer needs integers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorSample {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl ColorSample {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Relative luminance in `[0, 255]`. Alpha is ignored.
    pub fn luminance(&self) -> f64 {
        LUMA_RED * self.red + LUMA_GREEN * self.green + LUMA_BLUE * self.blue
    }

    pub fn rounded_rgb(&self) -> Rgb {
        Rgb::new(self.red.round() as u8, self.green.round() as u8, self.blue.round() as u8)
    }

    /// Alpha mapped to `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        (self.alpha / 255.0) as f32
    }
}
