//! Opaque color value backed by 8-bit sRGB, plus parsing and format rendering.

mod format;
mod parse;

use core::fmt;
use std::str::FromStr;

use palette::{Clamp, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use format::ColorFormats;
pub use parse::parse_color;

use crate::error::ParseError;

/// An immutable color value at display precision.
///
/// Stores sRGB with 8-bit channels; equality is channel equality, which is
/// exactly hex-string equality. Conversions to floating-point `palette`
/// spaces happen on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(Srgb<u8>);

impl Color {
    /// Build a color from 8-bit sRGB channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    /// Build a color from a floating-point sRGB value, clamping into gamut
    /// and rounding to display precision.
    #[must_use]
    pub fn from_srgb(srgb: Srgb<f32>) -> Self {
        Self(srgb.clamp().into_format())
    }

    /// The color as floating-point sRGB in [0, 1] per channel.
    #[must_use]
    pub fn srgb(self) -> Srgb<f32> {
        self.0.into_format()
    }

    /// The 8-bit `(red, green, blue)` channels.
    #[must_use]
    pub fn components(self) -> (u8, u8, u8) {
        self.0.into_components()
    }

    /// Lowercase `#rrggbb` rendering.
    #[must_use]
    pub fn hex(self) -> String {
        let (r, g, b) = self.components();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// All four display formats for this color.
    #[must_use]
    pub fn formats(self) -> ColorFormats {
        ColorFormats::of(self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_lowercase_and_padded() {
        assert_eq!(Color::new(0xB6, 0x56, 0xCD).hex(), "#b656cd");
        assert_eq!(Color::new(0, 1, 2).hex(), "#000102");
    }

    #[test]
    fn test_equality_is_display_precision() {
        let a = Color::from_srgb(Srgb::new(0.5, 0.5, 0.5));
        let b = Color::from_srgb(Srgb::new(0.501, 0.501, 0.501));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_srgb_clamps_out_of_gamut() {
        let c = Color::from_srgb(Srgb::new(1.2, -0.1, 0.5));
        assert_eq!(c.components(), (255, 0, 128));
    }

    #[test]
    fn test_serde_round_trip_as_hex() {
        let c = Color::new(0x34, 0x98, 0xDB);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#3498db\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
