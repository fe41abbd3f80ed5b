//! Error types shared by the parsing and generation layers.

use thiserror::Error;

/// Errors raised when a color string cannot be interpreted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty or whitespace only.
    #[error("empty color string")]
    Empty,
    /// Hex body was not 3 or 6 digits long.
    #[error("invalid hex length {0} (expected 3 or 6 digits)")]
    InvalidHexLength(usize),
    /// Hex body contained a non-hex character.
    #[error("invalid hex digit in `{0}`")]
    InvalidHexDigit(String),
    /// An `rgb()`/`hsl()` function had a malformed component list.
    #[error("malformed {0}() component list")]
    InvalidFunction(&'static str),
    /// A numeric component fell outside its channel range.
    #[error("{component} component out of range: {value}")]
    OutOfRange {
        /// Which component was rejected (`red`, `hue`, ...).
        component: &'static str,
        /// The offending raw value.
        value: String,
    },
    /// Input matched none of the accepted grammars.
    #[error("unrecognized color `{0}`")]
    Unrecognized(String),
}

/// Errors raised by shade generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The base color string failed to parse; no shades are produced.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Requested fewer than two shades; `count - 1` is a divisor in the
    /// lightness sweep, so singleton palettes are rejected outright.
    #[error("shade count must be at least 2 (got {0})")]
    CountTooSmall(usize),
}
