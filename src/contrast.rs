//! WCAG contrast evaluation and overlay text color selection.

use core::fmt;

use palette::color_difference::Wcag21RelativeContrast;
use serde::Serialize;

use crate::color::Color;

/// The overlay text color chosen for a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    /// `#ffffff`.
    White,
    /// `#000000`.
    Black,
}

impl TextColor {
    /// CSS keyword for this text color.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TextColor::White => "white",
            TextColor::Black => "black",
        }
    }

    /// The concrete color value.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            TextColor::White => Color::new(255, 255, 255),
            TextColor::Black => Color::new(0, 0, 0),
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WCAG 2.1 relative luminance contrast ratio between two colors.
///
/// Symmetric up to floating rounding; always in [1, 21].
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f32 {
    a.srgb().relative_contrast(b.srgb())
}

/// [`contrast_ratio`] formatted to two decimal places for display.
#[must_use]
pub fn contrast_ratio_display(a: Color, b: Color) -> String {
    format!("{:.2}", contrast_ratio(a, b))
}

/// Pick the higher-contrast overlay text color for a background.
///
/// White wins only when its ratio is strictly greater; an exact tie goes to
/// black. The strict comparison is load-bearing.
#[must_use]
pub fn best_text_color(background: Color) -> TextColor {
    let white = contrast_ratio(background, TextColor::White.color());
    let black = contrast_ratio(background, TextColor::Black.color());
    if white > black {
        TextColor::White
    } else {
        TextColor::Black
    }
}
