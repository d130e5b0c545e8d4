use super::face::Face;
use super::projection::{ObliqueProjection, RoomOutline};
use super::types::{BBox, DVec2};
use crate::layout::LayoutState;
use crate::types::ItemId;

/// Name tag drawn above the selected item
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: DVec2,
}

/// Everything needed to draw one placed item
#[derive(Clone, Debug, PartialEq)]
pub struct ItemSprite {
    pub id: ItemId,
    pub faces: [Face; 3],
    pub selected: bool,
    pub label: Option<Label>,
}

impl ItemSprite {
    pub fn bounds(&self) -> BBox {
        let [front, top, side] = &self.faces;
        front
            .geometry
            .bounds()
            .union(&top.geometry.bounds())
            .union(&side.geometry.bounds())
    }
}

/// Drawable snapshot of a layout, rebuilt after every state change
#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
    pub room: RoomOutline,
    /// Sprites in paint order (later items on top)
    pub sprites: Vec<ItemSprite>,
}

impl SceneFrame {
    pub fn build(state: &LayoutState) -> Self {
        let projection = ObliqueProjection::from_angle(state.view_angle());

        let sprites = state
            .items()
            .iter()
            .map(|item| {
                let faces = projection.project_item(item);
                let selected = state.is_selected(item.id);
                let label = selected.then(|| Label {
                    text: item.name.clone(),
                    anchor: faces.label_anchor,
                });
                ItemSprite {
                    id: item.id,
                    faces: faces.styled(item.color, selected),
                    selected,
                    label,
                }
            })
            .collect();

        Self {
            room: projection.project_room(state.room()),
            sprites,
        }
    }

    pub fn sprite(&self, id: ItemId) -> Option<&ItemSprite> {
        self.sprites.iter().find(|s| s.id == id)
    }

    pub fn selected(&self) -> Option<&ItemSprite> {
        self.sprites.iter().find(|s| s.selected)
    }
}
