//! Contrast rules for swatches drawn on top of arbitrary colors.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Alpha at or below which a swatch counts as see-through.
pub const ALPHA_THRESHOLD: u8 = 165;

/// Luminance from which a checkmark on an opaque swatch turns black.
const LIGHT_LUMINANCE: f64 = 0.65;

/// Luminance from which a checkmark on a selected shade turns black.
const LIGHT_SHADE_LUMINANCE: f64 = 0.5;

/// Swatch outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SwatchShape {
    #[default]
    Circle,
    Square,
}

/// Tint for the checkmark on a selected swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckmarkTint {
    /// Keep the checkmark's own color.
    Default,
    Black,
    White,
}

impl CheckmarkTint {
    /// Concrete color, `None` for [`CheckmarkTint::Default`].
    pub fn color(self) -> Option<Color> {
        match self {
            CheckmarkTint::Default => None,
            CheckmarkTint::Black => Some(Color::BLACK),
            CheckmarkTint::White => Some(Color::WHITE),
        }
    }
}

/// Checkmark tint for a selected preset swatch.
pub fn preset_checkmark(color: Color) -> CheckmarkTint {
    match color.alpha() {
        255 if color.luminance() >= LIGHT_LUMINANCE => CheckmarkTint::Black,
        255 => CheckmarkTint::Default,
        a if a <= ALPHA_THRESHOLD => CheckmarkTint::Black,
        _ => CheckmarkTint::White,
    }
}

/// Checkmark tint for a freshly tapped shade.
pub fn shade_checkmark(color: Color) -> CheckmarkTint {
    if color.luminance() >= LIGHT_SHADE_LUMINANCE || color.alpha() <= ALPHA_THRESHOLD {
        CheckmarkTint::Black
    } else {
        CheckmarkTint::Default
    }
}

/// Checkmark tint for the selected shade after the transparency changed.
pub fn shade_checkmark_after_alpha(color: Color) -> CheckmarkTint {
    if color.alpha() <= ALPHA_THRESHOLD || color.luminance() >= LIGHT_LUMINANCE {
        CheckmarkTint::Black
    } else {
        CheckmarkTint::White
    }
}

/// Border for a swatch showing `color`. See-through swatches get an opaque
/// border in their own color so they stay visible.
pub fn swatch_border(color: Color, default_border: Color) -> Color {
    if color.alpha() <= ALPHA_THRESHOLD {
        color.opaque()
    } else {
        default_border
    }
}

/// Label for the transparency slider, e.g. `"50%"`. `progress` is
/// `255 - alpha`.
pub fn transparency_label(progress: u8) -> String {
    format!("{}%", progress as u32 * 100 / 255)
}

/// Hint shown on a long press of a swatch: `#RRGGBB` for opaque colors,
/// otherwise the packed ARGB value in hex without leading zeros.
pub fn swatch_hint(color: Color) -> String {
    if color.alpha() == 255 {
        format!("#{}", color.hex_rgb())
    } else {
        format!("#{:X}", color.to_argb32())
    }
}
