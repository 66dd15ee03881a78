//! Colors for the neon aesthetic.
//!
//! Dark backgrounds, magenta/violet/cyan accents, translucent glows.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors from parsing a CSS-style hex color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string does not start with `#`.
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),

    /// Only `#rgb`, `#rrggbb` and `#rrggbbaa` are accepted.
    #[error("color must have 3, 6 or 8 hex digits: {0:?}")]
    BadLength(String),

    /// A non-hex character was found.
    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Neon pink (`#ff2bb3`), the default particle color.
    pub const NEON_PINK: Self = Self::rgba(1.0, 43.0 / 255.0, 179.0 / 255.0, 1.0);
    /// Neon violet (`#7a2ff7`).
    pub const NEON_VIOLET: Self = Self::rgba(122.0 / 255.0, 47.0 / 255.0, 247.0 / 255.0, 1.0);
    /// Neon cyan (`#29ffe3`).
    pub const NEON_CYAN: Self = Self::rgba(41.0 / 255.0, 1.0, 227.0 / 255.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    fn from_rgba_u32(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_be_bytes().map(|c| f32::from(c) / 255.0);
        Self::rgba(r, g, b, a)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if the string is not one of those forms.
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let digits = text
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(text.to_owned()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(text.to_owned()));
        }

        let expanded = match digits.len() {
            3 => {
                let mut out = String::with_capacity(8);
                for c in digits.chars() {
                    out.push(c);
                    out.push(c);
                }
                out.push_str("ff");
                out
            }
            6 => format!("{digits}ff"),
            8 => digits.to_owned(),
            _ => return Err(ColorError::BadLength(text.to_owned())),
        };

        u32::from_str_radix(&expanded, 16)
            .map(Self::from_rgba_u32)
            .map_err(|_| ColorError::BadDigit(text.to_owned()))
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Formats as a CSS `rgba(...)` string for canvas style properties.
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Formats as `#rrggbbaa`.
    #[must_use]
    pub fn to_hex_string(self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a)
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
