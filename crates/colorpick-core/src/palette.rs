//! Preset palettes and the merge rules used when the preset grid is loaded.

use crate::color::Color;

/// Material design 500-level colors used as the default presets.
pub const MATERIAL_COLORS: [Color; 19] = [
    Color::from_argb32(0xFFF4_4336), // Red
    Color::from_argb32(0xFFE9_1E63), // Pink
    Color::from_argb32(0xFFFF_2C93), // Light pink
    Color::from_argb32(0xFF9C_27B0), // Purple
    Color::from_argb32(0xFF67_3AB7), // Deep purple
    Color::from_argb32(0xFF3F_51B5), // Indigo
    Color::from_argb32(0xFF21_96F3), // Blue
    Color::from_argb32(0xFF03_A9F4), // Light blue
    Color::from_argb32(0xFF00_BCD4), // Cyan
    Color::from_argb32(0xFF00_9688), // Teal
    Color::from_argb32(0xFF4C_AF50), // Green
    Color::from_argb32(0xFF8B_C34A), // Light green
    Color::from_argb32(0xFFCD_DC39), // Lime
    Color::from_argb32(0xFFFF_EB3B), // Yellow
    Color::from_argb32(0xFFFF_C107), // Amber
    Color::from_argb32(0xFFFF_9800), // Orange
    Color::from_argb32(0xFF79_5548), // Brown
    Color::from_argb32(0xFF60_7D8B), // Blue grey
    Color::from_argb32(0xFF9E_9E9E), // Grey
];

/// Where [`ensure_present`] inserts a missing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Front,
    Back,
}

/// Return `palette` with `color` in it, inserting at `placement` when no
/// entry matches exactly. An existing entry is never duplicated or moved.
pub fn ensure_present(palette: &[Color], color: Color, placement: Placement) -> Vec<Color> {
    if palette.contains(&color) {
        return palette.to_vec();
    }

    let mut merged = Vec::with_capacity(palette.len() + 1);
    match placement {
        Placement::Front => {
            merged.push(color);
            merged.extend_from_slice(palette);
        }
        Placement::Back => {
            merged.extend_from_slice(palette);
            merged.push(color);
        }
    }
    merged
}

/// Give every entry of `palette` the same alpha, keeping RGB.
pub fn with_alpha(palette: &[Color], alpha: u8) -> Vec<Color> {
    palette.iter().map(|c| c.with_alpha(alpha)).collect()
}

/// Index of the first entry equal to `color`.
pub fn position_of(palette: &[Color], color: Color) -> Option<usize> {
    palette.iter().position(|&c| c == color)
}

/// Build the preset grid for an active color.
///
/// Presets take on the active color's alpha, and the active color is
/// put first if it is not already a preset. When the presets are the
/// default material palette and the active color was one of them, black is
/// appended so the grid fills four rows of five.
pub fn load_presets(presets: &[Color], active: Color) -> Vec<Color> {
    let alpha = active.alpha();
    let is_material = presets == &MATERIAL_COLORS[..];

    let presets = if alpha != 255 {
        with_alpha(presets, alpha)
    } else {
        presets.to_vec()
    };
    let mut presets = ensure_present(&presets, active, Placement::Front);

    if is_material && presets.len() == MATERIAL_COLORS.len() {
        presets = ensure_present(&presets, Color::BLACK.with_alpha(alpha), Placement::Back);
    }
    presets
}
