//! Conversion between packed colors and hue/saturation/value.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
///
/// Alpha is not part of the triple; it travels next to it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

/// Round half up to an 8-bit channel.
fn round_channel(x: f32) -> u8 {
    (x + 0.5).floor().clamp(0.0, 255.0) as u8
}

impl Hsv {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// HSV of the RGB channels of `color`.
    pub fn from_color(color: Color) -> Self {
        let (r, g, b) = (color.red() as f32, color.green() as f32, color.blue() as f32);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let value = max / 255.0;

        if delta == 0.0 {
            return Self::new(0.0, 0.0, value);
        }

        let saturation = delta / max;
        let sector = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        let mut hue = sector * 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        Self::new(hue, saturation, value)
    }

    /// Color with these components and the given alpha.
    ///
    /// Saturation and value are clamped to `[0, 1]`; a hue outside
    /// `[0, 360)` is treated as 0.
    pub fn to_color(self, alpha: u8) -> Color {
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.value.clamp(0.0, 1.0);
        let v_byte = round_channel(v * 255.0);

        if s <= f32::EPSILON {
            return Color::from_argb(alpha, v_byte, v_byte, v_byte);
        }

        let hx = if (0.0..360.0).contains(&self.hue) {
            self.hue / 60.0
        } else {
            0.0
        };
        let w = hx.floor();
        let f = hx - w;
        let p = round_channel((1.0 - s) * v * 255.0);
        let q = round_channel((1.0 - s * f) * v * 255.0);
        let t = round_channel((1.0 - s * (1.0 - f)) * v * 255.0);

        let (r, g, b) = match w as u8 {
            0 => (v_byte, t, p),
            1 => (q, v_byte, p),
            2 => (p, v_byte, t),
            3 => (p, q, v_byte),
            4 => (t, p, v_byte),
            _ => (v_byte, p, q),
        };
        Color::from_argb(alpha, r, g, b)
    }
}

impl From<Color> for Hsv {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn test_primary_hues() {
        assert_close(Hsv::from_color(Color::RED).hue, 0.0);
        assert_close(Hsv::from_color(Color::GREEN).hue, 120.0);
        assert_close(Hsv::from_color(Color::BLUE).hue, 240.0);
        assert_close(Hsv::from_color(Color::CYAN).hue, 180.0);
        assert_close(Hsv::from_color(Color::from_rgb(255, 0, 255)).hue, 300.0);
    }

    #[test]
    fn test_grays_have_no_saturation() {
        let hsv = Hsv::from_color(Color::from_rgb(128, 128, 128));
        assert_eq!(hsv.hue, 0.0);
        assert_eq!(hsv.saturation, 0.0);
        assert_close(hsv.value, 128.0 / 255.0);
        assert_eq!(hsv.to_color(255), Color::from_rgb(128, 128, 128));
    }

    #[test]
    fn test_to_color_primaries() {
        assert_eq!(Hsv::new(0.0, 1.0, 1.0).to_color(255), Color::RED);
        assert_eq!(Hsv::new(120.0, 1.0, 1.0).to_color(255), Color::GREEN);
        assert_eq!(Hsv::new(240.0, 1.0, 1.0).to_color(255), Color::BLUE);
        assert_eq!(Hsv::new(0.0, 0.0, 0.0).to_color(255), Color::BLACK);
    }

    #[test]
    fn test_hue_360_wraps_to_red() {
        assert_eq!(Hsv::new(360.0, 1.0, 1.0).to_color(255), Color::RED);
        assert_eq!(Hsv::new(-10.0, 1.0, 1.0).to_color(255), Color::RED);
    }

    #[test]
    fn test_alpha_passes_through() {
        assert_eq!(Hsv::new(0.0, 1.0, 1.0).to_color(0x40), Color::RED.with_alpha(0x40));
    }

    #[test]
    fn test_out_of_range_components_clamp() {
        assert_eq!(Hsv::new(0.0, 2.0, 5.0).to_color(255), Color::RED);
        assert_eq!(Hsv::new(0.0, -1.0, -1.0).to_color(255), Color::BLACK);
    }

    #[test]
    fn test_round_trip_within_one_step() {
        let samples = [
            0xFF21_96F3u32,
            0xFFF4_4336,
            0xFF79_5548,
            0xFFCD_DC39,
            0xFF01_0203,
            0xFFFE_FDFC,
        ];
        for argb in samples {
            let c = Color::from_argb32(argb);
            let back = Hsv::from_color(c).to_color(255);
            let pairs = [
                (c.red(), back.red()),
                (c.green(), back.green()),
                (c.blue(), back.blue()),
            ];
            for (x, y) in pairs {
                assert!(x.abs_diff(y) <= 1, "{c:?} -> {back:?}");
            }
        }
    }
}
