use crate::error::{KitchenError, Result};
use crate::types::Point;

pub const VIEWBOX_WIDTH: f64 = 600.0;
pub const VIEWBOX_HEIGHT: f64 = 400.0;
pub const GRID_CELL: f64 = 20.0;

/// Where the room's front-left floor corner sits in the drawing plane.
pub const ROOM_ORIGIN: Point = Point { x: 50.0, y: 350.0 };
pub const FLOOR_STRIP_HEIGHT: f64 = 40.0;

/// Every newly added item lands here; overlap is allowed.
pub const DEFAULT_PLACEMENT: Point = Point { x: 50.0, y: 50.0 };

pub const ACCENT_COLOR: &str = "#0EA5E9";
pub const NEUTRAL_STROKE: &str = "#666666";
pub const ROOM_STROKE: &str = "#999999";
pub const FLOOR_FILL: &str = "#E8E8E8";
pub const WALL_FILL: &str = "#F5F5F5";
pub const GRID_STROKE: &str = "#D0D0D0";

pub const FRONT_OPACITY: f64 = 1.0;
pub const TOP_OPACITY: f64 = 0.7;
pub const SIDE_OPACITY: f64 = 0.5;

pub const SELECTED_FRONT_STROKE_WIDTH: f64 = 3.0;
pub const SELECTED_FACE_STROKE_WIDTH: f64 = 2.0;
pub const NEUTRAL_STROKE_WIDTH: f64 = 1.0;
pub const ROOM_STROKE_WIDTH: f64 = 2.0;

pub const LABEL_OFFSET: f64 = 5.0;
pub const LABEL_FONT_SIZE: f64 = 12.0;

/// Bounds and step of a range control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    pub control: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl RangeSpec {
    /// Clamp into bounds, then snap to the nearest step counted from `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let bounded = value.clamp(self.min, self.max);
        let steps = ((bounded - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Parse a raw `<input type="range">` value.
    pub fn parse_input(&self, raw: &str) -> Result<f64> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| KitchenError::InvalidNumber {
                control: self.control,
                input: raw.to_string(),
            })?;

        if !value.is_finite() || !self.contains(value) {
            return Err(KitchenError::OutOfRange {
                control: self.control,
                value,
                min: self.min,
                max: self.max,
            });
        }

        Ok(self.clamp(value))
    }
}

pub const ROOM_WIDTH: RangeSpec = RangeSpec {
    control: "room width",
    min: 200.0,
    max: 600.0,
    step: 10.0,
    default: 400.0,
};

pub const ROOM_DEPTH: RangeSpec = RangeSpec {
    control: "room depth",
    min: 200.0,
    max: 600.0,
    step: 10.0,
    default: 300.0,
};

pub const VIEW_ANGLE: RangeSpec = RangeSpec {
    control: "view angle",
    min: 0.0,
    max: 90.0,
    step: 5.0,
    default: 45.0,
};
