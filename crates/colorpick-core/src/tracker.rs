//! Mapping between panel coordinates and HSV components.
//!
//! The custom picker shows three panels: a saturation/value plane, a vertical
//! hue slider and an optional horizontal alpha slider. Trackers are drawn at
//! the point for the current component, and a pointer position on a panel is
//! turned back into a component. Points outside a panel saturate to its edge.
//!
//! Every function here expects a rectangle with positive width and height.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::hsv::Hsv;

#[inline]
fn debug_assert_non_degenerate(rect: Rect) {
    debug_assert!(
        rect.width() > 0.0 && rect.height() > 0.0,
        "panel rect must have a positive size: {rect:?}"
    );
}

/// Tracker position for a hue on the hue slider. 360 is at the top edge,
/// 0 at the bottom.
pub fn hue_to_point(rect: Rect, hue: f32) -> Point {
    debug_assert_non_degenerate(rect);
    let height = rect.height();
    Point::new(rect.x0, height - hue as f64 * height / 360.0 + rect.y0)
}

/// Hue for a pointer on the hue slider. Only the y coordinate matters.
pub fn point_to_hue(rect: Rect, point: Point) -> f32 {
    debug_assert_non_degenerate(rect);
    let y = point.y.clamp(rect.y0, rect.y1) - rect.y0;
    (360.0 - y * 360.0 / rect.height()) as f32
}

/// Tracker position on the saturation/value plane. Saturation grows to the
/// right, value grows upward.
pub fn sat_val_to_point(rect: Rect, saturation: f32, value: f32) -> Point {
    debug_assert_non_degenerate(rect);
    Point::new(
        saturation as f64 * rect.width() + rect.x0,
        (1.0 - value as f64) * rect.height() + rect.y0,
    )
}

/// `(saturation, value)` for a pointer on the saturation/value plane.
pub fn point_to_sat_val(rect: Rect, point: Point) -> (f32, f32) {
    debug_assert_non_degenerate(rect);
    let x = point.x.clamp(rect.x0, rect.x1) - rect.x0;
    let y = point.y.clamp(rect.y0, rect.y1) - rect.y0;
    let saturation = x / rect.width();
    let value = 1.0 - y / rect.height();
    (saturation as f32, value as f32)
}

/// Tracker position for an alpha on the alpha slider. Opaque is at the left
/// edge, transparent at the right.
pub fn alpha_to_point(rect: Rect, alpha: u8) -> Point {
    debug_assert_non_degenerate(rect);
    let width = rect.width();
    Point::new(width - alpha as f64 * width / 255.0 + rect.x0, rect.y0)
}

/// Alpha for a pointer on the alpha slider. Only the x coordinate matters.
///
/// Rounds to the nearest alpha rather than truncating integer pixels, so on
/// a 100 wide slider an offset of 1 gives 252, not 253.
pub fn point_to_alpha(rect: Rect, point: Point) -> u8 {
    debug_assert_non_degenerate(rect);
    let x = point.x.clamp(rect.x0, rect.x1) - rect.x0;
    (255.0 - x * 255.0 / rect.width()).round().clamp(0.0, 255.0) as u8
}

/// One of the custom picker's panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    SatVal,
    Hue,
    Alpha,
}

/// Where the panels of the custom picker are, in pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerPanels {
    pub sat_val: Rect,
    pub hue: Rect,
    /// `None` when the alpha slider is hidden.
    pub alpha: Option<Rect>,
}

impl PickerPanels {
    pub fn new(sat_val: Rect, hue: Rect, alpha: Option<Rect>) -> Self {
        Self { sat_val, hue, alpha }
    }

    /// Which panel contains `point`, if any.
    pub fn hit(&self, point: Point) -> Option<Panel> {
        if self.hue.contains(point) {
            Some(Panel::Hue)
        } else if self.sat_val.contains(point) {
            Some(Panel::SatVal)
        } else if self.alpha.is_some_and(|r| r.contains(point)) {
            Some(Panel::Alpha)
        } else {
            None
        }
    }

    /// Rectangle of `panel`, if it is shown.
    pub fn rect(&self, panel: Panel) -> Option<Rect> {
        match panel {
            Panel::SatVal => Some(self.sat_val),
            Panel::Hue => Some(self.hue),
            Panel::Alpha => self.alpha,
        }
    }
}

/// State of the custom HSV picker: the components the trackers show.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvPicker {
    pub hsv: Hsv,
    pub alpha: u8,
}

impl Default for HsvPicker {
    fn default() -> Self {
        Self {
            hsv: Hsv::new(360.0, 0.0, 0.0),
            alpha: 255,
        }
    }
}

impl HsvPicker {
    /// Picker showing `color`.
    pub fn new(color: Color) -> Self {
        let mut picker = Self::default();
        picker.set_color(color);
        picker
    }

    /// The color the picker currently shows.
    pub fn color(&self) -> Color {
        self.hsv.to_color(self.alpha)
    }

    pub fn set_color(&mut self, color: Color) {
        self.hsv = Hsv::from_color(color);
        self.alpha = color.alpha();
    }

    /// Update the component `panel` controls from a pointer position.
    pub fn apply(&mut self, panel: Panel, rect: Rect, point: Point) -> Color {
        match panel {
            Panel::Hue => self.hsv.hue = point_to_hue(rect, point),
            Panel::SatVal => {
                let (saturation, value) = point_to_sat_val(rect, point);
                self.hsv.saturation = saturation;
                self.hsv.value = value;
            }
            Panel::Alpha => self.alpha = point_to_alpha(rect, point),
        }
        self.color()
    }

    /// Apply a drag sample. The panel the drag started on decides what
    /// changes, even when the pointer has since left it. Returns the new
    /// color, or `None` when the drag did not start on a panel.
    pub fn drag(&mut self, panels: &PickerPanels, start: Point, current: Point) -> Option<Color> {
        let panel = panels.hit(start)?;
        let rect = panels.rect(panel)?;
        Some(self.apply(panel, rect, current))
    }

    /// Tracker positions for the current components, in panel order
    /// sat/val, hue, alpha.
    pub fn tracker_points(&self, panels: &PickerPanels) -> (Point, Point, Option<Point>) {
        (
            sat_val_to_point(panels.sat_val, self.hsv.saturation, self.hsv.value),
            hue_to_point(panels.hue, self.hsv.hue),
            panels.alpha.map(|r| alpha_to_point(r, self.alpha)),
        )
    }
}
