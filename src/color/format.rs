//! Display-format rendering for a [`Color`].

use palette::{FromColor, Hsl, Hsv};
use serde::Serialize;

use super::Color;

/// The four textual renderings of a color, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFormats {
    /// `#rrggbb`, lowercase.
    pub hex: String,
    /// `rgb(R, G, B)`, integer channels.
    pub rgb: String,
    /// `hsl(H, S%, L%)`, integer degrees and percents.
    pub hsl: String,
    /// `hsv(H, S%, V%)`, integer degrees and percents.
    pub hsv: String,
}

impl ColorFormats {
    /// Render all four formats. Pure; never fails for a valid color.
    #[must_use]
    pub fn of(color: Color) -> Self {
        let (r, g, b) = color.components();
        let srgb = color.srgb();
        let hsl = Hsl::from_color(srgb);
        let hsv = Hsv::from_color(srgb);

        Self {
            hex: color.hex(),
            rgb: format!("rgb({r}, {g}, {b})"),
            hsl: format!(
                "hsl({}, {}%, {}%)",
                round_hue(hsl.hue.into_positive_degrees()),
                round_pct(hsl.saturation),
                round_pct(hsl.lightness),
            ),
            hsv: format!(
                "hsv({}, {}%, {}%)",
                round_hue(hsv.hue.into_positive_degrees()),
                round_pct(hsv.saturation),
                round_pct(hsv.value),
            ),
        }
    }
}

/// Round a hue to the nearest integer degree in [0, 360).
///
/// Achromatic colors come out of `palette` with hue 0, matching the
/// "0 when undefined" display rule; 359.5+ wraps back to 0.
fn round_hue(degrees: f32) -> u16 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = degrees.round().rem_euclid(360.0) as u16;
    rounded
}

/// Round a [0, 1] fraction to the nearest integer percent.
fn round_pct(fraction: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = (fraction.clamp(0.0, 1.0) * 100.0).round() as u8;
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_color;

    #[test]
    fn test_mid_gray_formats() {
        let formats = parse_color("#808080").unwrap().formats();
        assert_eq!(formats.hex, "#808080");
        assert_eq!(formats.rgb, "rgb(128, 128, 128)");
        assert_eq!(formats.hsl, "hsl(0, 0%, 50%)");
        assert_eq!(formats.hsv, "hsv(0, 0%, 50%)");
    }

    #[test]
    fn test_primary_red_formats() {
        let formats = parse_color("#ff0000").unwrap().formats();
        assert_eq!(formats.rgb, "rgb(255, 0, 0)");
        assert_eq!(formats.hsl, "hsl(0, 100%, 50%)");
        assert_eq!(formats.hsv, "hsv(0, 100%, 100%)");
    }

    #[test]
    fn test_pure_blue_formats() {
        let formats = parse_color("#0000ff").unwrap().formats();
        assert_eq!(formats.hsl, "hsl(240, 100%, 50%)");
        assert_eq!(formats.hsv, "hsv(240, 100%, 100%)");
    }

    #[test]
    fn test_white_and_black_formats() {
        let white = parse_color("#ffffff").unwrap().formats();
        assert_eq!(white.hsl, "hsl(0, 0%, 100%)");
        assert_eq!(white.hsv, "hsv(0, 0%, 100%)");

        let black = parse_color("#000000").unwrap().formats();
        assert_eq!(black.hsl, "hsl(0, 0%, 0%)");
        assert_eq!(black.hsv, "hsv(0, 0%, 0%)");
    }

    #[test]
    fn test_hue_wraps_to_zero() {
        assert_eq!(round_hue(359.8), 0);
        assert_eq!(round_hue(360.0), 0);
        assert_eq!(round_hue(0.2), 0);
    }
}
