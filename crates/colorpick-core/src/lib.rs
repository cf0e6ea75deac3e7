//! colorpick core library
//!
//! Toolkit-independent logic of a color picker dialog: hex parsing, shade
//! derivation, preset merging, HSV conversion, panel/HSV coordinate mapping
//! and the headless dialog state. Rendering and input capture belong to the
//! host UI toolkit.

pub mod color;
pub mod config;
pub mod hsv;
pub mod palette;
pub mod parse;
pub mod session;
pub mod shade;
pub mod swatch;
pub mod tracker;

pub use color::Color;
pub use config::{ConfigError, PickerConfig, PickerMode};
pub use hsv::Hsv;
pub use palette::{MATERIAL_COLORS, Placement, ensure_present, load_presets};
pub use parse::{ColorParseError, parse_color_string};
pub use session::{PickerError, PickerEvent, PickerResult, PickerSession};
pub use shade::{SHADE_PERCENTS, color_shades, shade_color};
pub use swatch::{ALPHA_THRESHOLD, CheckmarkTint, SwatchShape, swatch_hint};
pub use tracker::{
    HsvPicker, Panel, PickerPanels, alpha_to_point, hue_to_point, point_to_alpha, point_to_hue,
    point_to_sat_val, sat_val_to_point,
};
