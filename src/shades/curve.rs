//! Saturation curve for tinted-neutral generation.

use super::Mode;

/// Lightness percent on which the parabola is centered.
const PIVOT: f32 = 50.0;

/// Adjust a base saturation for one sampled lightness.
///
/// Inert in basic mode. In tinted mode the multiplier is a parabola centered
/// on 50% lightness:
///
/// `1 + ((l - 50)^2 / mod - 50^2 / mod) / 100`
///
/// The `50^2 / mod` subtraction pins the multiplier to exactly 1 at the
/// lightness extremes (0 and 100); in between it dips, bottoming out at
/// `1 - 25 / mod` at the midpoint, so smaller `saturation_mod` means a
/// deeper desaturation trough. The result is clamped to [0, 1].
#[must_use]
pub fn adjusted_saturation(
    lightness_pct: f32,
    base_saturation: f32,
    mode: Mode,
    saturation_mod: f32,
) -> f32 {
    if mode == Mode::Basic {
        return base_saturation;
    }
    debug_assert!(saturation_mod.is_finite() && saturation_mod > 0.0);

    let offset = lightness_pct - PIVOT;
    let multiplier = 1.0 + (offset * offset / saturation_mod - PIVOT * PIVOT / saturation_mod) / 100.0;
    (base_saturation * multiplier).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_mode_is_inert() {
        for lightness in [0.0, 25.0, 50.0, 100.0] {
            assert_eq!(adjusted_saturation(lightness, 0.2, Mode::Basic, 70.0), 0.2);
        }
    }

    #[test]
    fn test_midpoint_trough_is_one_minus_25_over_mod() {
        // At 50% lightness the offset term vanishes and the multiplier
        // bottoms out at 1 - 2500 / (mod * 100); mod = 25 zeroes it out.
        for (saturation_mod, expected) in [
            (25.0, 0.0),
            (70.0, 0.2 * (1.0 - 25.0 / 70.0)),
            (200.0, 0.175),
        ] {
            let adjusted = adjusted_saturation(50.0, 0.2, Mode::Tinted, saturation_mod);
            assert!(
                (adjusted - expected).abs() < 1e-6,
                "mod {saturation_mod}: {adjusted} vs {expected}"
            );
        }
    }

    #[test]
    fn test_curve_dips_between_pivot_and_extremes() {
        // (l - 50)^2 - 50^2 is zero at l = 0 and l = 100 and negative in
        // between, so the multiplier dips below 1 only at mid lightnesses.
        let at_0 = adjusted_saturation(0.0, 0.2, Mode::Tinted, 70.0);
        let at_100 = adjusted_saturation(100.0, 0.2, Mode::Tinted, 70.0);
        assert!((at_0 - 0.2).abs() < 1e-6);
        assert!((at_100 - 0.2).abs() < 1e-6);

        let at_25 = adjusted_saturation(25.0, 0.2, Mode::Tinted, 70.0);
        assert!(at_25 < 0.2, "quarter-lightness should dip: {at_25}");
    }

    #[test]
    fn test_smaller_mod_is_steeper() {
        let shallow = adjusted_saturation(25.0, 0.2, Mode::Tinted, 200.0);
        let steep = adjusted_saturation(25.0, 0.2, Mode::Tinted, 25.0);
        assert!(steep < shallow);
    }

    #[test]
    fn test_result_is_clamped() {
        // A large base saturation at the midpoint stays within [0, 1].
        let adjusted = adjusted_saturation(50.0, 1.0, Mode::Tinted, 25.0);
        assert!((0.0..=1.0).contains(&adjusted));
        // Steep curve at extreme lightness cannot go negative.
        let floor = adjusted_saturation(0.0, 1.0, Mode::Tinted, 25.0);
        assert!(floor >= 0.0);
    }
}
