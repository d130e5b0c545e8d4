use super::types::{BBox, DVec2, FaceStyle, StrokeStyle};
use crate::config;

/// Which visible side of a box a face represents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceKind {
    Front,
    Top,
    Side,
}

impl FaceKind {
    pub fn opacity(&self) -> f64 {
        match self {
            FaceKind::Front => config::FRONT_OPACITY,
            FaceKind::Top => config::TOP_OPACITY,
            FaceKind::Side => config::SIDE_OPACITY,
        }
    }

    /// Outline for this face, highlighted when its item is selected.
    pub fn stroke(&self, selected: bool) -> StrokeStyle {
        match (self, selected) {
            (_, false) => StrokeStyle::neutral(),
            (FaceKind::Front, true) => {
                StrokeStyle::new(config::ACCENT_COLOR, config::SELECTED_FRONT_STROKE_WIDTH)
            }
            (_, true) => {
                StrokeStyle::new(config::ACCENT_COLOR, config::SELECTED_FACE_STROKE_WIDTH)
            }
        }
    }
}

/// Geometry of a projected face in the drawing plane
#[derive(Clone, Debug, PartialEq)]
pub enum FaceGeometry {
    /// Axis-aligned rectangle anchored at its top-left corner
    Rectangle {
        origin: DVec2,
        width: f64,
        height: f64,
        corner_radius: f64,
    },

    /// Closed polygon
    Polygon { points: Vec<DVec2> },
}

impl FaceGeometry {
    pub fn rectangle(origin: DVec2, width: f64, height: f64) -> Self {
        Self::Rectangle {
            origin,
            width,
            height,
            corner_radius: 0.0,
        }
    }

    pub fn rounded_rectangle(origin: DVec2, width: f64, height: f64, corner_radius: f64) -> Self {
        Self::Rectangle {
            origin,
            width,
            height,
            corner_radius,
        }
    }

    pub fn polygon(points: Vec<DVec2>) -> Self {
        Self::Polygon { points }
    }

    /// Vertices in drawing order (clockwise on screen for rectangles).
    pub fn corners(&self) -> Vec<DVec2> {
        match self {
            FaceGeometry::Rectangle {
                origin,
                width,
                height,
                ..
            } => vec![
                *origin,
                *origin + DVec2::new(*width, 0.0),
                *origin + DVec2::new(*width, *height),
                *origin + DVec2::new(0.0, *height),
            ],
            FaceGeometry::Polygon { points } => points.clone(),
        }
    }

    pub fn bounds(&self) -> BBox {
        BBox::from_points(&self.corners()).unwrap_or(BBox::new(DVec2::ZERO, DVec2::ZERO))
    }

    /// `points` attribute for an SVG `<polygon>`
    pub fn svg_points(&self) -> String {
        stringify_points(&self.corners())
    }
}

/// One styled face ready for drawing
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    pub kind: FaceKind,
    pub geometry: FaceGeometry,
    pub style: FaceStyle,
}

/// Convert points to SVG-style "x1,y1 x2,y2" string
pub fn stringify_points(points: &[DVec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", format_coord(p.x), format_coord(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two decimals are plenty for a 600x400 viewBox; trailing zeros are dropped.
pub fn format_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0" from tiny negative trig residue
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stringify_points() {
        let points = vec![
            DVec2::new(70.0, 260.0),
            DVec2::new(150.0, 260.0),
            DVec2::new(192.43, 217.57),
        ];
        assert_eq!(stringify_points(&points), "70,260 150,260 192.43,217.57");
    }

    #[test]
    fn test_format_coord_rounds_and_normalizes_zero() {
        assert_eq!(format_coord(42.426406), "42.43");
        assert_eq!(format_coord(-1e-12), "0");
        assert_eq!(format_coord(3.0), "3");
    }

    #[test]
    fn test_rectangle_corners_and_bounds() {
        let geometry = FaceGeometry::rectangle(DVec2::new(10.0, 20.0), 100.0, 50.0);
        let corners = geometry.corners();
        assert_eq!(corners[0], DVec2::new(10.0, 20.0));
        assert_eq!(corners[2], DVec2::new(110.0, 70.0));

        let bounds = geometry.bounds();
        assert_eq!(bounds.width(), 100.0);
        assert_eq!(bounds.height(), 50.0);
    }

    #[test]
    fn test_selected_stroke_is_accented() {
        assert_eq!(FaceKind::Front.stroke(true).width, 3.0);
        assert_eq!(FaceKind::Top.stroke(true).width, 2.0);
        assert_eq!(FaceKind::Side.stroke(true).color, config::ACCENT_COLOR);
        assert_eq!(FaceKind::Side.stroke(false), StrokeStyle::neutral());
    }
}
