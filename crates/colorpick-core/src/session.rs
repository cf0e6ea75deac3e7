//! Headless state of an open color picker dialog.
//!
//! A [`PickerSession`] holds everything the dialog shows: the page, the
//! active color, the preset grid with its selection, the shades row, the HSV
//! picker and the hex field. The host toolkit renders this state and forwards
//! taps, drags, slider moves and text edits; the session answers with the
//! new state and, when the user settles on a color, a [`PickerEvent`].

use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::config::{PickerConfig, PickerMode};
use crate::palette::{load_presets, position_of, with_alpha};
use crate::parse::{ColorParseError, parse_color_string};
use crate::shade::color_shades;
use crate::tracker::{HsvPicker, PickerPanels};

/// Errors from feeding input that does not fit the session's state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("no preset at index {index} (have {len})")]
    PresetOutOfRange { index: usize, len: usize },
    #[error("no shade at index {index} (have {len})")]
    ShadeOutOfRange { index: usize, len: usize },
    #[error("color shades are disabled")]
    ShadesHidden,
    #[error("alpha slider is disabled")]
    AlphaSliderHidden,
    #[error("input belongs to the {expected:?} page")]
    WrongMode { expected: PickerMode },
    #[error(transparent)]
    Parse(#[from] ColorParseError),
}

/// Result type for session input.
pub type PickerResult<T> = Result<T, PickerError>;

/// What the dialog reports to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PickerEvent {
    /// The user picked `color`; the dialog closes.
    Selected { dialog_id: i32, color: Color },
    /// The dialog closed.
    Dismissed { dialog_id: i32 },
}

/// State of one picker dialog.
///
/// Serializable so a host can keep it across a teardown of its views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerSession {
    config: PickerConfig,
    mode: PickerMode,
    color: Color,
    /// Color when the custom page was opened, shown next to the new one.
    original_color: Color,
    presets: Vec<Color>,
    selected_preset: Option<usize>,
    shades: Option<[Color; 12]>,
    selected_shade: Option<usize>,
    picker: HsvPicker,
    hex: String,
}

impl PickerSession {
    pub fn new(config: PickerConfig) -> Self {
        let mut session = Self {
            mode: config.mode,
            color: config.color,
            original_color: config.color,
            presets: Vec::new(),
            selected_preset: None,
            shades: None,
            selected_shade: None,
            picker: HsvPicker::new(config.color),
            hex: String::new(),
            config,
        };
        session.reload();
        session
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn mode(&self) -> PickerMode {
        self.mode
    }

    /// The active color.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn original_color(&self) -> Color {
        self.original_color
    }

    pub fn presets(&self) -> &[Color] {
        &self.presets
    }

    pub fn selected_preset(&self) -> Option<usize> {
        self.selected_preset
    }

    /// Shades of the active color, `None` when shades are disabled.
    pub fn shades(&self) -> Option<&[Color; 12]> {
        self.shades.as_ref()
    }

    pub fn selected_shade(&self) -> Option<usize> {
        self.selected_shade
    }

    pub fn picker(&self) -> &HsvPicker {
        &self.picker
    }

    /// Contents of the hex field.
    pub fn hex_text(&self) -> &str {
        &self.hex
    }

    /// Longest text the hex field accepts, `None` when unlimited.
    pub fn max_hex_len(&self) -> Option<usize> {
        (!self.config.show_alpha_slider).then_some(6)
    }

    /// Transparency slider position, `255 - alpha`.
    pub fn transparency(&self) -> u8 {
        255 - self.color.alpha()
    }

    /// Page the toggle button switches to, `None` when it is hidden.
    pub fn toggle_target(&self) -> Option<PickerMode> {
        self.config
            .can_leave(self.mode)
            .then(|| self.mode.other())
    }

    /// Switch to the other page if allowed. Returns the new page.
    pub fn toggle_mode(&mut self) -> Option<PickerMode> {
        let target = self.toggle_target()?;
        log::debug!("picker {}: {:?} -> {:?}", self.config.dialog_id, self.mode, target);
        self.mode = target;
        self.reload();
        Some(target)
    }

    /// Rebuild the state of the current page from the active color.
    fn reload(&mut self) {
        match self.mode {
            PickerMode::Presets => {
                self.presets = load_presets(&self.config.presets, self.color);
                self.selected_preset = position_of(&self.presets, self.color);
                self.shades = self
                    .config
                    .show_color_shades
                    .then(|| color_shades(self.color));
                self.selected_shade = None;
            }
            PickerMode::Custom => {
                self.original_color = self.color;
                self.picker.set_color(self.color);
                self.color = self.picker.color();
                self.hex = self.format_hex(self.color);
            }
        }
    }

    fn expect_mode(&self, expected: PickerMode) -> PickerResult<()> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(PickerError::WrongMode { expected })
        }
    }

    fn format_hex(&self, color: Color) -> String {
        if self.config.show_alpha_slider {
            color.hex_argb()
        } else {
            color.hex_rgb()
        }
    }

    /// Tap on a preset swatch.
    ///
    /// Without shades a tap picks the color right away. With shades, the
    /// first tap makes the preset active and derives its shades; tapping the
    /// active color again picks it.
    pub fn select_preset(&mut self, index: usize) -> PickerResult<Option<PickerEvent>> {
        self.expect_mode(PickerMode::Presets)?;
        let color = *self.presets.get(index).ok_or(PickerError::PresetOutOfRange {
            index,
            len: self.presets.len(),
        })?;
        self.selected_preset = Some(index);

        if self.shades.is_none() {
            self.color = color;
            return Ok(Some(self.confirm()));
        }
        if self.color == color {
            return Ok(Some(self.confirm()));
        }

        log::debug!("picker {}: preset {index} {color}", self.config.dialog_id);
        self.color = color;
        self.shades = Some(color_shades(color));
        self.selected_shade = None;
        Ok(None)
    }

    /// Tap on a shade swatch. Tapping the selected shade again picks it.
    pub fn select_shade(&mut self, index: usize) -> PickerResult<Option<PickerEvent>> {
        self.expect_mode(PickerMode::Presets)?;
        let shades = self.shades.ok_or(PickerError::ShadesHidden)?;
        let shade = *shades.get(index).ok_or(PickerError::ShadeOutOfRange {
            index,
            len: shades.len(),
        })?;

        if self.selected_shade == Some(index) {
            return Ok(Some(self.confirm()));
        }

        log::debug!("picker {}: shade {index} {shade}", self.config.dialog_id);
        self.color = shade;
        self.selected_preset = None;
        self.selected_shade = Some(index);
        Ok(None)
    }

    /// Move the transparency slider. `progress` is `255 - alpha`; the new
    /// alpha applies to presets, shades and the active color.
    pub fn set_transparency(&mut self, progress: u8) -> PickerResult<()> {
        self.expect_mode(PickerMode::Presets)?;
        if !self.config.show_alpha_slider {
            return Err(PickerError::AlphaSliderHidden);
        }

        let alpha = 255 - progress;
        log::debug!("picker {}: alpha {alpha}", self.config.dialog_id);
        self.presets = with_alpha(&self.presets, alpha);
        if let Some(shades) = self.shades.as_mut() {
            for shade in shades.iter_mut() {
                *shade = shade.with_alpha(alpha);
            }
        }
        self.color = self.color.with_alpha(alpha);
        Ok(())
    }

    /// Feed a drag sample on the custom page. Returns the new color when the
    /// drag started on one of the panels.
    pub fn drag(
        &mut self,
        panels: &PickerPanels,
        start: Point,
        current: Point,
    ) -> PickerResult<Option<Color>> {
        self.expect_mode(PickerMode::Custom)?;
        let panels = PickerPanels {
            alpha: panels.alpha.filter(|_| self.config.show_alpha_slider),
            ..*panels
        };
        let Some(color) = self.picker.drag(&panels, start, current) else {
            return Ok(None);
        };
        self.color = color;
        self.hex = self.format_hex(color);
        Ok(Some(color))
    }

    /// The user edited the hex field.
    ///
    /// The field keeps the text as typed. When it parses to a color other
    /// than the one the picker shows, the picker and active color follow it.
    /// Text past [`Self::max_hex_len`] is dropped.
    pub fn edit_hex(&mut self, text: &str) -> PickerResult<Option<Color>> {
        self.expect_mode(PickerMode::Custom)?;
        self.hex = match self.max_hex_len() {
            Some(max) => text.chars().take(max).collect(),
            None => text.to_string(),
        };

        let parsed = parse_color_string(&self.hex)?;
        if parsed == self.picker.color() {
            return Ok(None);
        }
        self.picker.set_color(parsed);
        self.color = self.picker.color();
        Ok(Some(self.color))
    }

    /// Tap on the panel showing the new color. Picks it.
    pub fn tap_new_color(&mut self) -> PickerResult<Option<PickerEvent>> {
        self.expect_mode(PickerMode::Custom)?;
        Ok((self.picker.color() == self.color).then(|| self.confirm()))
    }

    /// The select button.
    pub fn confirm(&self) -> PickerEvent {
        PickerEvent::Selected {
            dialog_id: self.config.dialog_id,
            color: self.color,
        }
    }

    /// The dialog went away without a selection.
    pub fn dismiss(&self) -> PickerEvent {
        PickerEvent::Dismissed {
            dialog_id: self.config.dialog_id,
        }
    }
}
