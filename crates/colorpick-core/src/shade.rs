//! Tints and shades derived from a base color.

use crate::color::Color;

/// Blend fractions for [`color_shades`], lightest first. Positive values
/// blend toward white, negative values toward black.
pub const SHADE_PERCENTS: [f64; 12] = [
    0.9, 0.7, 0.5, 0.333, 0.166, -0.125, -0.25, -0.375, -0.5, -0.675, -0.7, -0.775,
];

/// Blend the RGB channels of `color` toward white (`percent > 0`) or black
/// (`percent < 0`) by `|percent|`. Alpha is kept.
pub fn shade_color(color: Color, percent: f64) -> Color {
    let target = if percent < 0.0 { 0.0 } else { 255.0 };
    let magnitude = percent.abs();
    let blend = |channel: u8| -> u8 {
        let channel = channel as f64;
        // Halves round up, also for negative offsets.
        let offset = ((target - channel) * magnitude + 0.5).floor();
        (offset + channel).clamp(0.0, 255.0) as u8
    };

    Color::from_argb(
        color.alpha(),
        blend(color.red()),
        blend(color.green()),
        blend(color.blue()),
    )
}

/// The 12 shades shown under the preset grid, from lightest to darkest.
pub fn color_shades(color: Color) -> [Color; 12] {
    SHADE_PERCENTS.map(|percent| shade_color(color, percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_red_shades() {
        let shades = color_shades(Color::RED);
        assert_eq!(shades.len(), 12);
        // 0.9 toward white: green/blue = round(255 * 0.9) = 230
        assert_eq!(shades[0], Color::from_rgb(255, 230, 230));
        // -0.775 toward black: red = round(-255 * 0.775) + 255 = 57
        assert_eq!(shades[11], Color::from_rgb(57, 0, 0));
        assert!(shades.iter().all(|c| c.alpha() == 255));
    }

    #[test]
    fn test_shades_lighter_then_darker() {
        let base = Color::from_rgb(0x21, 0x96, 0xF3);
        let shades = color_shades(base);
        let first = shades[0];
        let last = shades[11];
        assert!(
            first.red() >= base.red()
                && first.green() >= base.green()
                && first.blue() >= base.blue()
        );
        assert!(first != base);
        assert!(
            last.red() <= base.red() && last.green() <= base.green() && last.blue() <= base.blue()
        );
        assert!(last != base);
    }

    #[test]
    fn test_shades_keep_alpha() {
        let base = Color::from_argb(0x40, 0x9C, 0x27, 0xB0);
        assert!(color_shades(base).iter().all(|c| c.alpha() == 0x40));
    }

    #[test]
    fn test_rounding_is_half_up() {
        // (0 - 100) * 0.125 = -12.5, rounds up to -12
        let c = shade_color(Color::from_rgb(100, 100, 100), -0.125);
        assert_eq!(c, Color::from_rgb(88, 88, 88));
        // (255 - 1) * 0.5 = 127.0
        let c = shade_color(Color::from_rgb(1, 1, 1), 0.5);
        assert_eq!(c, Color::from_rgb(128, 128, 128));
    }

    #[test]
    fn test_white_and_black_extremes() {
        assert!(color_shades(Color::WHITE)[..5].iter().all(|&c| c == Color::WHITE));
        assert!(color_shades(Color::BLACK)[5..].iter().all(|&c| c == Color::BLACK));
    }
}
