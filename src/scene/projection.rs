//! Oblique (cavalier) projection of box-shaped items onto the drawing plane.
//!
//! Width and height are drawn undistorted; the depth axis is drawn as a
//! vector of length `depth` rotated `view_angle` degrees up from the x axis.
//! Screen y grows downwards, so "up" is a negative y offset.

use super::face::{Face, FaceGeometry, FaceKind};
use super::types::{Color, DVec2, FaceStyle};
use crate::config;
use crate::layout::{PlacedItem, RoomDimensions};

const FRONT_CORNER_RADIUS: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObliqueProjection {
    /// Front-left floor corner of the room in drawing coordinates
    pub origin: DVec2,
    cos: f64,
    sin: f64,
}

impl ObliqueProjection {
    pub fn new(origin: DVec2, view_angle_degrees: f64) -> Self {
        let radians = view_angle_degrees.to_radians();
        Self {
            origin,
            cos: radians.cos(),
            sin: radians.sin(),
        }
    }

    /// Projection anchored at the configured room origin
    pub fn from_angle(view_angle_degrees: f64) -> Self {
        let origin = DVec2::new(config::ROOM_ORIGIN.x, config::ROOM_ORIGIN.y);
        Self::new(origin, view_angle_degrees)
    }

    /// Screen-space offset of a point `depth` units behind the front plane.
    pub fn depth_offset(&self, depth: f64) -> DVec2 {
        DVec2::new(depth * self.cos, -depth * self.sin)
    }

    pub fn project_item(&self, item: &PlacedItem) -> ItemFaces {
        let extent = item.extent;
        let top_left = self.origin + DVec2::new(item.position.x, -extent.height);
        let top_right = top_left + DVec2::new(extent.width, 0.0);
        let back = self.depth_offset(extent.depth);

        ItemFaces {
            front: FaceGeometry::rounded_rectangle(
                top_left,
                extent.width,
                extent.height,
                FRONT_CORNER_RADIUS,
            ),
            top: FaceGeometry::polygon(vec![
                top_left,
                top_right,
                top_right + back,
                top_left + back,
            ]),
            side: FaceGeometry::rectangle(top_right, back.x, extent.height),
            label_anchor: DVec2::new(
                top_left.x + extent.width / 2.0,
                top_left.y - config::LABEL_OFFSET,
            ),
        }
    }

    pub fn project_room(&self, room: RoomDimensions) -> RoomOutline {
        let front_right = self.origin + DVec2::new(room.width, 0.0);
        let back = self.depth_offset(room.depth);

        RoomOutline {
            floor: FaceGeometry::rectangle(self.origin, room.width, config::FLOOR_STRIP_HEIGHT),
            back_wall: FaceGeometry::polygon(vec![
                self.origin,
                front_right,
                front_right + back,
                self.origin + back,
            ]),
        }
    }
}

/// The three visible faces of a projected item
#[derive(Clone, Debug, PartialEq)]
pub struct ItemFaces {
    pub front: FaceGeometry,
    pub top: FaceGeometry,
    pub side: FaceGeometry,
    /// Bottom-center point of the selection label
    pub label_anchor: DVec2,
}

impl ItemFaces {
    /// Styled faces in paint order: front, top, side.
    pub fn styled(&self, fill: Color, selected: bool) -> [Face; 3] {
        let face = |kind: FaceKind, geometry: &FaceGeometry| Face {
            kind,
            geometry: geometry.clone(),
            style: FaceStyle {
                fill,
                opacity: kind.opacity(),
                stroke: kind.stroke(selected),
            },
        };
        [
            face(FaceKind::Front, &self.front),
            face(FaceKind::Top, &self.top),
            face(FaceKind::Side, &self.side),
        ]
    }
}

/// Floor strip and back-wall parallelogram of the room
#[derive(Clone, Debug, PartialEq)]
pub struct RoomOutline {
    pub floor: FaceGeometry,
    pub back_wall: FaceGeometry,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CABINETS;
    use crate::types::{ItemCategory, Point};

    const EPS: f64 = 1e-9;

    fn assert_close(a: DVec2, b: DVec2) {
        assert!(a.abs_diff_eq(b, EPS), "{a:?} != {b:?}");
    }

    fn cabinet() -> PlacedItem {
        PlacedItem::from_preset(ItemCategory::Cabinet, &CABINETS[0], Point::new(20.0, 20.0))
    }

    #[test]
    fn test_front_face_is_angle_independent() {
        let item = cabinet();
        let fronts: Vec<_> = (0..=18)
            .map(|step| ObliqueProjection::from_angle(step as f64 * 5.0).project_item(&item).front)
            .collect();
        assert!(fronts.windows(2).all(|w| w[0] == w[1]));

        match &fronts[0] {
            FaceGeometry::Rectangle {
                origin,
                width,
                height,
                ..
            } => {
                assert_eq!(*origin, DVec2::new(70.0, 260.0));
                assert_eq!(*width, 80.0);
                assert_eq!(*height, 90.0);
            }
            other => panic!("Expected Rectangle, got {other:?}"),
        }
    }

    #[test]
    fn test_depth_offset_at_extremes() {
        let flat = ObliqueProjection::from_angle(0.0);
        assert_close(flat.depth_offset(60.0), DVec2::new(60.0, 0.0));

        let overhead = ObliqueProjection::from_angle(90.0);
        assert_close(overhead.depth_offset(60.0), DVec2::new(0.0, -60.0));
    }

    #[test]
    fn test_offsets_track_cos_and_sin() {
        let mut previous = ObliqueProjection::from_angle(0.0).depth_offset(60.0);
        for step in 1..=18 {
            let offset = ObliqueProjection::from_angle(step as f64 * 5.0).depth_offset(60.0);
            assert!(offset.x < previous.x, "horizontal offset shrinks");
            assert!(offset.y < previous.y, "vertical offset grows upwards");
            assert!((offset.length() - 60.0).abs() < EPS);
            previous = offset;
        }
    }

    #[test]
    fn test_top_face_at_45_degrees() {
        let faces = ObliqueProjection::from_angle(45.0).project_item(&cabinet());
        let d = 60.0 * std::f64::consts::FRAC_1_SQRT_2;
        let corners = faces.top.corners();

        assert_close(corners[0], DVec2::new(70.0, 260.0));
        assert_close(corners[1], DVec2::new(150.0, 260.0));
        assert_close(corners[2], DVec2::new(150.0 + d, 260.0 - d));
        assert_close(corners[3], DVec2::new(70.0 + d, 260.0 - d));
    }

    #[test]
    fn test_side_face_width_follows_cos() {
        let item = cabinet();
        for angle in [0.0, 30.0, 60.0, 90.0] {
            let faces = ObliqueProjection::from_angle(angle).project_item(&item);
            let bounds = faces.side.bounds();
            assert!((bounds.width() - 60.0 * f64::cos(angle.to_radians())).abs() < EPS);
            assert_eq!(bounds.height(), 90.0);
            assert_eq!(bounds.min, DVec2::new(150.0, 260.0));
        }
    }

    #[test]
    fn test_projection_is_deterministic() {
        let item = cabinet();
        let projection = ObliqueProjection::from_angle(35.0);
        assert_eq!(projection.project_item(&item), projection.project_item(&item));
    }

    #[test]
    fn test_label_anchor_above_front_face() {
        let faces = ObliqueProjection::from_angle(45.0).project_item(&cabinet());
        assert_eq!(faces.label_anchor, DVec2::new(110.0, 255.0));
    }

    #[test]
    fn test_styled_faces_opacity_and_stroke() {
        let item = cabinet();
        let faces = ObliqueProjection::from_angle(45.0).project_item(&item);

        let [front, top, side] = faces.styled(item.color, false);
        assert_eq!(front.style.opacity, 1.0);
        assert_eq!(top.style.opacity, 0.7);
        assert_eq!(side.style.opacity, 0.5);
        assert!([&front, &top, &side].iter().all(|f| f.style.fill == item.color));
        assert_eq!(front.style.stroke.color, config::NEUTRAL_STROKE);

        let [front, top, _] = faces.styled(item.color, true);
        assert_eq!(front.style.stroke.color, config::ACCENT_COLOR);
        assert_eq!(front.style.stroke.width, 3.0);
        assert_eq!(top.style.stroke.width, 2.0);
    }

    #[test]
    fn test_room_outline() {
        let room = RoomDimensions {
            width: 400.0,
            depth: 300.0,
        };
        let outline = ObliqueProjection::from_angle(0.0).project_room(room);

        let floor = outline.floor.bounds();
        assert_eq!(floor.min, DVec2::new(50.0, 350.0));
        assert_eq!(floor.width(), 400.0);
        assert_eq!(floor.height(), 40.0);

        let wall = outline.back_wall.corners();
        assert_close(wall[2], DVec2::new(750.0, 350.0));
        assert_close(wall[3], DVec2::new(350.0, 350.0));
    }
}
