//! Parser for the accepted color grammars: hex, `rgb()`, `hsl()`, named.

use palette::{FromColor, Hsl, Srgb, named};

use super::Color;
use crate::error::ParseError;

/// Parse a color from textual form.
///
/// Accepted grammars: `#RGB`, `#RRGGBB` (case-insensitive), `rgb(r, g, b)`
/// with integer channels in [0, 255], `hsl(h, s%, l%)` with hue in [0, 360]
/// and percentages in [0, 100] (the `%` sign is optional), and CSS named
/// colors such as `rebeccapurple`.
pub fn parse_color(input: &str) -> Result<Color, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(args) = function_args(&lower, "rgb") {
        return parse_rgb_func(args);
    }
    if let Some(args) = function_args(&lower, "hsl") {
        return parse_hsl_func(args);
    }

    named::from_str(&lower)
        .map(|srgb| Color::new(srgb.red, srgb.green, srgb.blue))
        .ok_or_else(|| ParseError::Unrecognized(trimmed.to_owned()))
}

/// Parse a hex body (without the leading `#`), either 3 or 6 digits.
fn parse_hex(hex: &str) -> Result<Color, ParseError> {
    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };
    let invalid = || ParseError::InvalidHexDigit(format!("#{hex}"));

    let bytes = hex.as_bytes();
    let (r, g, b) = match bytes.len() {
        3 => {
            let r = nibble(bytes[0]).ok_or_else(invalid)?;
            let g = nibble(bytes[1]).ok_or_else(invalid)?;
            let b = nibble(bytes[2]).ok_or_else(invalid)?;
            (r * 17, g * 17, b * 17)
        }
        6 => {
            let nibble2 = |hi: u8, lo: u8| -> Result<u8, ParseError> {
                let h = nibble(hi).ok_or_else(invalid)?;
                let l = nibble(lo).ok_or_else(invalid)?;
                Ok(h << 4 | l)
            };
            (
                nibble2(bytes[0], bytes[1])?,
                nibble2(bytes[2], bytes[3])?,
                nibble2(bytes[4], bytes[5])?,
            )
        }
        len => return Err(ParseError::InvalidHexLength(len)),
    };

    Ok(Color::new(r, g, b))
}

/// If `input` is `name(...)`, return the argument text between the parens.
fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Parse the `r, g, b` component list of an `rgb()` function.
fn parse_rgb_func(args: &str) -> Result<Color, ParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(ParseError::InvalidFunction("rgb"));
    };
    Ok(Color::new(
        channel_u8(r, "red")?,
        channel_u8(g, "green")?,
        channel_u8(b, "blue")?,
    ))
}

/// Parse one integer channel in [0, 255].
fn channel_u8(raw: &str, component: &'static str) -> Result<u8, ParseError> {
    let value: i64 = raw
        .parse()
        .map_err(|_| ParseError::InvalidFunction("rgb"))?;
    u8::try_from(value).map_err(|_| ParseError::OutOfRange {
        component,
        value: raw.to_owned(),
    })
}

/// Parse the `h, s%, l%` component list of an `hsl()` function.
fn parse_hsl_func(args: &str) -> Result<Color, ParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let [h, s, l] = parts.as_slice() else {
        return Err(ParseError::InvalidFunction("hsl"));
    };

    let hue = component_f32(h, "hue", 360.0)?;
    let saturation = component_f32(s.trim_end_matches('%'), "saturation", 100.0)? / 100.0;
    let lightness = component_f32(l.trim_end_matches('%'), "lightness", 100.0)? / 100.0;

    let srgb = Srgb::from_color(Hsl::new(hue, saturation, lightness));
    Ok(Color::from_srgb(srgb))
}

/// Parse one non-negative numeric component bounded by `max`.
fn component_f32(raw: &str, component: &'static str, max: f32) -> Result<f32, ParseError> {
    let value: f32 = raw
        .parse()
        .map_err(|_| ParseError::InvalidFunction("hsl"))?;
    if !value.is_finite() || !(0.0..=max).contains(&value) {
        return Err(ParseError::OutOfRange {
            component,
            value: raw.to_owned(),
        });
    }
    Ok(value)
}
