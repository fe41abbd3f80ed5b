//! Shade generation: the perceptual basic scale and the tinted-neutral sweep.

mod curve;

use palette::{FromColor, Hsl, Lab, Mix, Srgb};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub use curve::adjusted_saturation;

use crate::{color::Color, error::GenerateError};

/// Base saturation fraction for tinted neutrals, before curve adjustment.
pub const BASE_SATURATION: f32 = 0.2;

/// Light anchor of the basic interpolation path (near-white, not pure white).
const LIGHT_ANCHOR: Color = Color::new(0xFE, 0xFE, 0xFE);
/// Dark anchor of the basic interpolation path (near-black, not pure black).
const DARK_ANCHOR: Color = Color::new(0x01, 0x01, 0x01);

/// Which generation algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Perceptual interpolation through near-white, the base color, and
    /// near-black.
    Basic,
    /// Lightness sweep at a fixed hue with a curve-adjusted low saturation.
    Tinted,
}

/// A validated shade-generation request.
///
/// The `validator` ranges mirror the UI slider domains; [`generate_shades`]
/// itself only requires `count >= 2` and is happy to serve callers outside
/// the slider ranges.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ShadeRequest {
    /// Base color in any grammar accepted by [`crate::color::parse_color`].
    pub base_color: String,
    /// Number of shades to produce.
    #[validate(range(min = 5, max = 50))]
    pub count: usize,
    /// Generation mode.
    pub mode: Mode,
    /// Fixed hue in degrees, tinted mode only.
    #[serde(default = "default_hue")]
    #[validate(range(min = 0, max = 359))]
    pub hue: u16,
    /// Saturation curve width, tinted mode only.
    #[serde(default = "default_saturation_mod")]
    #[validate(range(min = 25, max = 200))]
    pub saturation_mod: u16,
}

fn default_hue() -> u16 {
    200
}

fn default_saturation_mod() -> u16 {
    70
}

impl ShadeRequest {
    /// Basic-mode request with the tinted knobs left at their defaults.
    #[must_use]
    pub fn basic(base_color: impl Into<String>, count: usize) -> Self {
        Self {
            base_color: base_color.into(),
            count,
            mode: Mode::Basic,
            hue: default_hue(),
            saturation_mod: default_saturation_mod(),
        }
    }

    /// Tinted-mode request.
    #[must_use]
    pub fn tinted(
        base_color: impl Into<String>,
        count: usize,
        hue: u16,
        saturation_mod: u16,
    ) -> Self {
        Self {
            base_color: base_color.into(),
            count,
            mode: Mode::Tinted,
            hue,
            saturation_mod,
        }
    }
}

/// Generate an ordered light-to-dark shade list for a request.
///
/// The base color is parsed first in both modes; a parse failure produces no
/// shades. Counts below 2 are rejected so the `count - 1` lightness divisor
/// in tinted mode is always positive.
pub fn generate_shades(request: &ShadeRequest) -> Result<Vec<Color>, GenerateError> {
    if request.count < 2 {
        return Err(GenerateError::CountTooSmall(request.count));
    }
    let base: Color = request.base_color.parse()?;

    let shades = match request.mode {
        Mode::Basic => basic_shades(base, request.count),
        Mode::Tinted => tinted_shades(
            request.count,
            f32::from(request.hue),
            f32::from(request.saturation_mod),
        ),
    };
    debug_assert_eq!(shades.len(), request.count);
    Ok(shades)
}

/// Basic mode: piecewise-linear path in CIE Lab through near-white, the base
/// color, and near-black (anchors at positions 0, 0.5, 1). `count + 2`
/// evenly spaced samples are taken and the two endpoint samples discarded,
/// so every returned shade is pulled toward the base hue.
fn basic_shades(base: Color, count: usize) -> Vec<Color> {
    let light = Lab::from_color(LIGHT_ANCHOR.srgb());
    let mid = Lab::from_color(base.srgb());
    let dark = Lab::from_color(DARK_ANCHOR.srgb());

    (1..=count)
        .map(|k| {
            #[allow(clippy::cast_precision_loss)]
            let t = k as f32 / (count + 1) as f32;
            let lab = if t <= 0.5 {
                light.mix(mid, t * 2.0)
            } else {
                mid.mix(dark, (t - 0.5) * 2.0)
            };
            Color::from_srgb(Srgb::from_color(lab))
        })
        .collect()
}

/// Tinted mode: sweep lightness from 1.0 down to 0.0 in `count` equal steps
/// at a fixed hue, saturation following the curve around [`BASE_SATURATION`].
/// The first shade is pure white and the last pure black regardless of hue.
fn tinted_shades(count: usize, hue: f32, saturation_mod: f32) -> Vec<Color> {
    (0..count)
        .rev()
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let lightness = i as f32 / (count - 1) as f32;
            let saturation = adjusted_saturation(
                lightness * 100.0,
                BASE_SATURATION,
                Mode::Tinted,
                saturation_mod,
            );
            Color::from_srgb(Srgb::from_color(Hsl::new(hue, saturation, lightness)))
        })
        .collect()
}
