//! Hex color string parsing for the picker's hex input field.

use std::str::FromStr;

use thiserror::Error;

use crate::color::Color;

/// Errors from parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("invalid hex digits in color segment: {0:?}")]
    InvalidHexDigit(String),
}

/// Read a segment of at most two hex digits.
fn hex(segment: &str) -> Result<u8, ColorParseError> {
    let invalid = || ColorParseError::InvalidHexDigit(segment.to_string());
    // `from_str_radix` would accept a leading `+`.
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    u8::from_str_radix(segment, 16).map_err(|_| invalid())
}

/// Parse a hex color string, with or without a leading `#`.
///
/// How the digits map to channels depends on how many there are:
///
/// | digits | channels                                  |
/// |--------|-------------------------------------------|
/// | 0      | opaque black                              |
/// | 1-2    | `B` / `BB`, opaque                        |
/// | 3      | `RGB`, one digit each, not expanded       |
/// | 4      | `GGBB`, red forced to 0                   |
/// | 5      | `RGGBB`                                   |
/// | 6      | `RRGGBB`                                  |
/// | 7      | `ARRGGBB`                                 |
/// | 8      | `AARRGGBB`                                |
///
/// Any other length yields [`Color::INVALID`]. The four digit form drops the
/// first byte into green and leaves red at zero; callers rely on it matching
/// what the hex field has always produced, so it is kept as is.
pub fn parse_color_string(text: &str) -> Result<Color, ColorParseError> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    let len = digits.chars().count();

    if (1..=8).contains(&len) && !digits.is_ascii() {
        return Err(ColorParseError::InvalidHexDigit(digits.to_string()));
    }

    let (a, r, g, b) = match len {
        0 => (255, 0, 0, 0),
        1 | 2 => (255, 0, 0, hex(digits)?),
        3 => (255, hex(&digits[0..1])?, hex(&digits[1..2])?, hex(&digits[2..3])?),
        4 => (255, 0, hex(&digits[0..2])?, hex(&digits[2..4])?),
        5 => (255, hex(&digits[0..1])?, hex(&digits[1..3])?, hex(&digits[3..5])?),
        6 => (255, hex(&digits[0..2])?, hex(&digits[2..4])?, hex(&digits[4..6])?),
        7 => (
            hex(&digits[0..1])?,
            hex(&digits[1..3])?,
            hex(&digits[3..5])?,
            hex(&digits[5..7])?,
        ),
        8 => (
            hex(&digits[0..2])?,
            hex(&digits[2..4])?,
            hex(&digits[4..6])?,
            hex(&digits[6..8])?,
        ),
        _ => {
            log::warn!("unsupported hex color length {len} in {text:?}");
            return Ok(Color::INVALID);
        }
    };

    Ok(Color::from_argb(a, r, g, b))
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color_string(s)
    }
}
