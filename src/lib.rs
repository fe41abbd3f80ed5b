//! Core library for the color shade generator, exposing parsing, format
//! conversion, contrast evaluation, and shade generation to binaries and
//! integration tests.

pub mod color;
pub mod config;
pub mod contrast;
pub mod error;
pub mod random;
pub mod shades;

pub use color::{Color, ColorFormats, parse_color};
pub use contrast::{TextColor, best_text_color, contrast_ratio, contrast_ratio_display};
pub use error::{GenerateError, ParseError};
pub use random::{random_color, random_hex};
pub use shades::{Mode, ShadeRequest, adjusted_saturation, generate_shades};
