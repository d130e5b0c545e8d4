use crate::config;
use crate::error::KitchenError;
pub use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque sRGB fill color, written as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn white() -> Self {
        Self::rgb(0xFF, 0xFF, 0xFF)
    }

    /// Parse a hex color string (e.g., "#8B7355" or "8b7355")
    pub fn from_hex(hex: &str) -> Result<Self, KitchenError> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || KitchenError::InvalidColor(hex.to_string());
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = KitchenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Stroke styling for face outlines
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: &'static str,
    pub width: f64,
}

impl StrokeStyle {
    pub const fn new(color: &'static str, width: f64) -> Self {
        Self { color, width }
    }

    pub const fn neutral() -> Self {
        Self::new(config::NEUTRAL_STROKE, config::NEUTRAL_STROKE_WIDTH)
    }
}

/// Complete styling for one projected face
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceStyle {
    pub fill: Color,
    pub opacity: f64,
    pub stroke: StrokeStyle,
}

/// Axis-aligned bounding box in drawing-plane coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl BBox {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), &p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Expand to include another bounding box
    pub fn union(&self, other: &BBox) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}
