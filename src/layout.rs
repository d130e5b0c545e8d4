use crate::catalog::{ItemPreset, SEED_ITEMS};
use crate::config;
use crate::scene::Color;
use crate::types::{Extent, ItemCategory, ItemId, Point};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use yew::functional::Reducible;

/// Global item ID counter
static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

fn generate_item_id() -> ItemId {
    ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
}

/// A piece of furniture placed in the room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub id: ItemId,
    pub category: ItemCategory,
    /// Footprint offset from the room's front-left corner
    pub position: Point,
    pub extent: Extent,
    pub color: Color,
    pub name: String,
    pub price: u64,
}

impl PlacedItem {
    pub fn from_preset(category: ItemCategory, preset: &ItemPreset, position: Point) -> Self {
        Self {
            id: generate_item_id(),
            category,
            position,
            extent: preset.extent,
            color: preset.color,
            name: preset.name.to_string(),
            price: preset.price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f64,
    pub depth: f64,
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self {
            width: config::ROOM_WIDTH.default,
            depth: config::ROOM_DEPTH.default,
        }
    }
}

/// A single state transition requested by the view
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutAction {
    AddItem {
        category: ItemCategory,
        preset: ItemPreset,
    },
    RemoveItem(ItemId),
    RemoveSelected,
    RecolorSelected(Color),
    Select(Option<ItemId>),
    SetRoomWidth(f64),
    SetRoomDepth(f64),
    SetViewAngle(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    items: Vec<PlacedItem>,
    room: RoomDimensions,
    selection: Option<ItemId>,
    view_angle: f64,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl LayoutState {
    /// Empty room at default size
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            room: RoomDimensions::default(),
            selection: None,
            view_angle: config::VIEW_ANGLE.default,
        }
    }

    /// Starting layout: lower cabinet, countertop and fridge
    pub fn seeded() -> Self {
        let mut state = Self::new();
        state.items = SEED_ITEMS
            .iter()
            .map(|seed| PlacedItem::from_preset(seed.category, &seed.preset, seed.position))
            .collect();
        state
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn room(&self) -> RoomDimensions {
        self.room
    }

    pub fn view_angle(&self) -> f64 {
        self.view_angle
    }

    pub fn selection(&self) -> Option<ItemId> {
        self.selection
    }

    pub fn get_item(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The selected item, or `None` when nothing (or a stale id) is selected.
    pub fn selected_item(&self) -> Option<&PlacedItem> {
        self.selection.and_then(|id| self.get_item(id))
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected_item().is_some_and(|item| item.id == id)
    }

    /// Append a copy of `preset` at the default placement point and return its id
    pub fn add_item(&mut self, category: ItemCategory, preset: &ItemPreset) -> ItemId {
        let item = PlacedItem::from_preset(category, preset, config::DEFAULT_PLACEMENT);
        let id = item.id;
        log::info!("added {} '{}' as {}", category.label(), item.name, id);
        self.items.push(item);
        id
    }

    /// Remove an item by ID, clearing the selection if it pointed at it
    pub fn remove_item(&mut self, id: ItemId) -> Option<PlacedItem> {
        let pos = self.items.iter().position(|item| item.id == id)?;
        if self.selection == Some(id) {
            self.selection = None;
        }
        let removed = self.items.remove(pos);
        log::info!("removed '{}' ({})", removed.name, id);
        Some(removed)
    }

    /// Replace the color of `id`. Does nothing while no item is selected or
    /// when `id` is unknown; returns whether a color changed hands.
    pub fn recolor_item(&mut self, id: ItemId, color: Color) -> bool {
        if self.selected_item().is_none() {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.color = color;
                true
            }
            None => false,
        }
    }

    pub fn select(&mut self, id: Option<ItemId>) {
        self.selection = id;
    }

    pub fn set_room_width(&mut self, width: f64) {
        self.room.width = config::ROOM_WIDTH.clamp(width);
    }

    pub fn set_room_depth(&mut self, depth: f64) {
        self.room.depth = config::ROOM_DEPTH.clamp(depth);
    }

    pub fn set_view_angle(&mut self, degrees: f64) {
        self.view_angle = config::VIEW_ANGLE.clamp(degrees);
    }

    /// Apply one action to a copy of this state
    pub fn reduce(&self, action: LayoutAction) -> Self {
        log::debug!("layout action: {:?}", action);
        let mut next = self.clone();
        match action {
            LayoutAction::AddItem { category, preset } => {
                next.add_item(category, &preset);
            }
            LayoutAction::RemoveItem(id) => {
                next.remove_item(id);
            }
            LayoutAction::RemoveSelected => {
                if let Some(id) = next.selection {
                    next.remove_item(id);
                }
            }
            LayoutAction::RecolorSelected(color) => {
                if let Some(id) = next.selection {
                    next.recolor_item(id, color);
                }
            }
            LayoutAction::Select(id) => next.select(id),
            LayoutAction::SetRoomWidth(width) => next.set_room_width(width),
            LayoutAction::SetRoomDepth(depth) => next.set_room_depth(depth),
            LayoutAction::SetViewAngle(degrees) => next.set_view_angle(degrees),
        }
        next
    }
}

impl Reducible for LayoutState {
    type Action = LayoutAction;

    fn reduce(self: Rc<Self>, action: LayoutAction) -> Rc<Self> {
        Rc::new(LayoutState::reduce(&self, action))
    }
}
