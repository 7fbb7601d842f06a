use serde::{Deserialize, Serialize};

use crate::TextArtError;

/// Character ramp ordered from the visually heaviest glyph to the lightest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gradient {
    chars: Vec<char>,
}

impl Gradient {
    /// # Panics
    ///
    /// Panics if `chars` holds fewer than two characters.
    pub fn new(chars: impl Into<String>) -> Self {
        let chars: Vec<char> = chars.into().chars().collect();
        assert!(chars.len() >= 2, "gradient must contain at least two characters");
        Self { chars }
    }

    pub fn try_new(chars: impl Into<String>) -> Result<Self, TextArtError> {
        let chars: String = chars.into();
        if chars.chars().count() < 2 {
            return Err(TextArtError::InvalidGradient(chars));
        }
        Ok(Self { chars: chars.chars().collect() })
    }

    /// The 17-glyph ramp used for monochrome output.
    pub fn monochrome() -> Self {
        Self::new("MND8OV%$7I?+=~:,.")
    }

    pub fn detailed() -> Self {
        Self::new("$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ")
    }

    pub fn standard() -> Self {
        Self::new("@%#*+=-:. ")
    }

    pub fn blocks() -> Self {
        Self::new("█▓▒░ ")
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Map `value` in `[0, 1]` to the nearest ramp index.
    pub fn clamp_index(&self, value: f64) -> usize {
        let levels = (self.chars.len() - 1) as f64;
        let idx = (value * levels).clamp(0.0, levels);
        idx.round() as usize
    }

    /// Ramp index for a luminance in `[0, 255]`: `round((len - 1) * L / 255)`.
    ///
    /// Dark input selects heavy glyphs, bright input selects light ones.
    pub fn index_for_luminance(&self, luminance: f64) -> usize {
        self.clamp_index(luminance / 255.0)
    }

    pub fn char_at(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::monochrome()
    }
}

impl TryFrom<String> for Gradient {
    type Error = TextArtError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Gradient> for String {
    fn from(gradient: Gradient) -> Self {
        gradient.chars.into_iter().collect()
    }
}
