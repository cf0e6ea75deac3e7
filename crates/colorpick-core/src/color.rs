//! The packed ARGB color value shared by every part of the picker.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parse::{ColorParseError, parse_color_string};

/// A 32-bit color with 8-bit alpha, red, green and blue channels.
///
/// Channels are packed as `a << 24 | r << 16 | g << 8 | b`. Colors are plain
/// values: every operation returns a new color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color(u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const GREEN: Color = Color(0xFF00_FF00);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const CYAN: Color = Color(0xFF00_FFFF);

    /// Result of parsing a hex string of unsupported length: every channel
    /// set to -1. Its bits are the same as opaque white.
    pub const INVALID: Color = Color(0xFFFF_FFFF);

    /// Create a color from its packed `0xAARRGGBB` form.
    pub const fn from_argb32(argb: u32) -> Self {
        Self(argb)
    }

    /// Create a color from individual channels.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Create an opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Packed `0xAARRGGBB` value.
    pub const fn to_argb32(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same RGB, different alpha.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Same RGB, fully opaque.
    #[must_use]
    pub const fn opaque(self) -> Self {
        self.with_alpha(255)
    }

    /// Check if the RGB channels match, ignoring alpha.
    pub const fn rgb_eq(self, other: Color) -> bool {
        (self.0 & 0x00FF_FFFF) == (other.0 & 0x00FF_FFFF)
    }

    /// Relative luminance in `0.0..=1.0` (sRGB primaries, Rec. 709 weights).
    ///
    /// Alpha is ignored.
    pub fn luminance(self) -> f64 {
        fn linearize(channel: u8) -> f64 {
            let c = channel as f64 / 255.0;
            if c < 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.red())
            + 0.7152 * linearize(self.green())
            + 0.0722 * linearize(self.blue())
    }

    /// Six uppercase hex digits, `RRGGBB`. Alpha is dropped.
    pub fn hex_rgb(self) -> String {
        format!("{:06X}", self.0 & 0x00FF_FFFF)
    }

    /// Eight uppercase hex digits, `AARRGGBB`.
    pub fn hex_argb(self) -> String {
        format!("{:08X}", self.0)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08X})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_color_string(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_pack_and_unpack() {
        let c = Color::from_argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_argb32(), 0x1234_5678);
        assert_eq!(c.alpha(), 0x12);
        assert_eq!(c.red(), 0x34);
        assert_eq!(c.green(), 0x56);
        assert_eq!(c.blue(), 0x78);
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let c = Color::from_rgb(10, 20, 30).with_alpha(128);
        assert_eq!(c, Color::from_argb(128, 10, 20, 30));
        assert_eq!(c.opaque(), Color::from_rgb(10, 20, 30));
        assert!(c.rgb_eq(Color::from_rgb(10, 20, 30)));
        assert!(!c.rgb_eq(Color::from_rgb(10, 20, 31)));
    }

    #[test]
    fn test_hex_formatting() {
        let c = Color::from_argb32(0x80FF_0A00);
        assert_eq!(c.hex_rgb(), "FF0A00");
        assert_eq!(c.hex_argb(), "80FF0A00");
        assert_eq!(c.to_string(), "#80FF0A00");
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(Color::BLACK.luminance(), 0.0);
        assert!((Color::WHITE.luminance() - 1.0).abs() < 1e-9);
        // Green dominates perceived brightness.
        assert!(Color::GREEN.luminance() > Color::RED.luminance());
        assert!(Color::RED.luminance() > Color::BLUE.luminance());
    }

    #[test]
    fn test_invalid_sentinel_is_all_ones() {
        assert_eq!(Color::INVALID.to_argb32(), u32::MAX);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::from_argb32(0x80FF_0000)).unwrap();
        assert_eq!(json, "\"#80FF0000\"");

        let back: Color = serde_json::from_str("\"#FF2196F3\"").unwrap();
        assert_eq!(back, Color::from_argb32(0xFF21_96F3));

        assert!(serde_json::from_str::<Color>("\"#GG0000\"").is_err());
    }
}
