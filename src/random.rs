//! Uniform random color sampling.

use rand::Rng;

use crate::color::Color;

/// Draw a color uniformly from the 24-bit RGB cube.
#[must_use]
pub fn random_color() -> Color {
    let value: u32 = rand::rng().random_range(0..=0xFF_FFFF);
    #[allow(clippy::cast_possible_truncation)]
    let (r, g, b) = ((value >> 16) as u8, (value >> 8) as u8, value as u8);
    Color::new(r, g, b)
}

/// [`random_color`] rendered as lowercase `#rrggbb`.
#[must_use]
pub fn random_hex() -> String {
    random_color().hex()
}
