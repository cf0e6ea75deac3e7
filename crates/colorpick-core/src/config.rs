//! Options for one color picker dialog.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::palette::MATERIAL_COLORS;
use crate::swatch::SwatchShape;

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which page of the dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerMode {
    /// HSV panels and hex field.
    Custom,
    /// Preset grid, shades and transparency slider.
    #[default]
    Presets,
}

impl PickerMode {
    /// The other page.
    pub fn other(self) -> Self {
        match self {
            PickerMode::Custom => PickerMode::Presets,
            PickerMode::Presets => PickerMode::Custom,
        }
    }
}

/// Dialog options, built in code or loaded from JSON.
///
/// Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Page shown first.
    pub mode: PickerMode,
    /// Echoed back in [`crate::PickerEvent`]s to tell dialogs apart.
    pub dialog_id: i32,
    /// Initially active color.
    pub color: Color,
    pub presets: Vec<Color>,
    /// Allow switching from presets to the custom page.
    pub allow_custom: bool,
    /// Allow switching from the custom page to presets.
    pub allow_presets: bool,
    pub show_alpha_slider: bool,
    pub show_color_shades: bool,
    pub shape: SwatchShape,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            mode: PickerMode::Presets,
            dialog_id: 0,
            color: Color::BLACK,
            presets: MATERIAL_COLORS.to_vec(),
            allow_custom: true,
            allow_presets: true,
            show_alpha_slider: false,
            show_color_shades: true,
            shape: SwatchShape::Circle,
        }
    }
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: PickerMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn dialog_id(mut self, dialog_id: i32) -> Self {
        self.dialog_id = dialog_id;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn presets(mut self, presets: impl Into<Vec<Color>>) -> Self {
        self.presets = presets.into();
        self
    }

    pub fn allow_custom(mut self, allow: bool) -> Self {
        self.allow_custom = allow;
        self
    }

    pub fn allow_presets(mut self, allow: bool) -> Self {
        self.allow_presets = allow;
        self
    }

    pub fn show_alpha_slider(mut self, show: bool) -> Self {
        self.show_alpha_slider = show;
        self
    }

    pub fn show_color_shades(mut self, show: bool) -> Self {
        self.show_color_shades = show;
        self
    }

    pub fn shape(mut self, shape: SwatchShape) -> Self {
        self.shape = shape;
        self
    }

    /// Whether the dialog offers a button to switch away from `mode`.
    pub fn can_leave(&self, mode: PickerMode) -> bool {
        match mode {
            PickerMode::Presets => self.allow_custom,
            PickerMode::Custom => self.allow_presets,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path.as_ref(), self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PickerConfig::default();
        assert_eq!(config.mode, PickerMode::Presets);
        assert_eq!(config.color, Color::BLACK);
        assert_eq!(config.presets, MATERIAL_COLORS.to_vec());
        assert!(config.allow_custom && config.allow_presets && config.show_color_shades);
        assert!(!config.show_alpha_slider);
        assert_eq!(config.shape, SwatchShape::Circle);
    }

    #[test]
    fn test_builder() {
        let config = PickerConfig::new()
            .mode(PickerMode::Custom)
            .dialog_id(7)
            .color(Color::CYAN)
            .presets([Color::RED, Color::GREEN])
            .allow_presets(false)
            .show_alpha_slider(true)
            .shape(SwatchShape::Square);
        assert_eq!(config.mode, PickerMode::Custom);
        assert_eq!(config.dialog_id, 7);
        assert_eq!(config.presets, vec![Color::RED, Color::GREEN]);
        assert!(!config.can_leave(PickerMode::Custom));
        assert!(config.can_leave(PickerMode::Presets));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PickerConfig::from_json(
            r##"{ "mode": "custom", "color": "#8000BCD4", "show_alpha_slider": true }"##,
        )
        .unwrap();
        assert_eq!(config.mode, PickerMode::Custom);
        assert_eq!(config.color, Color::from_argb32(0x8000_BCD4));
        assert!(config.show_alpha_slider);
        assert_eq!(config.presets.len(), 19);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            PickerConfig::from_json(r##"{ "color": "#XYZ" }"##),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(PickerConfig::from_json("not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker.json");
        let config = PickerConfig::new().color(Color::RED).dialog_id(3);
        config.save(&path).unwrap();
        assert_eq!(PickerConfig::load(&path).unwrap(), config);

        assert!(matches!(
            PickerConfig::load(dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
