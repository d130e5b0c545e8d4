use crate::scene::Color;
use crate::types::{Extent, ItemCategory, Point};

/// Template for a purchasable cabinet or appliance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u64,
    pub extent: Extent,
    pub color: Color,
}

/// Finish that can be applied to a selected item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub color: Color,
}

/// Whole-kitchen template. Shown for reference only; choosing one does nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
}

const WOOD: Color = Color::rgb(0x8B, 0x73, 0x55);

pub const CABINETS: [ItemPreset; 3] = [
    ItemPreset {
        id: "lower",
        name: "Lower cabinet",
        price: 15_000,
        extent: Extent::new(80.0, 60.0, 90.0),
        color: WOOD,
    },
    ItemPreset {
        id: "upper",
        name: "Upper cabinet",
        price: 12_000,
        extent: Extent::new(80.0, 35.0, 70.0),
        color: Color::rgb(0xA0, 0x82, 0x6D),
    },
    ItemPreset {
        id: "corner",
        name: "Corner cabinet",
        price: 18_000,
        extent: Extent::new(90.0, 90.0, 90.0),
        color: WOOD,
    },
];

pub const APPLIANCES: [ItemPreset; 3] = [
    ItemPreset {
        id: "fridge",
        name: "Fridge",
        price: 45_000,
        extent: Extent::new(60.0, 60.0, 200.0),
        color: Color::rgb(0xC0, 0xC0, 0xC0),
    },
    ItemPreset {
        id: "oven",
        name: "Oven",
        price: 35_000,
        extent: Extent::new(60.0, 55.0, 60.0),
        color: Color::rgb(0x2C, 0x2C, 0x2C),
    },
    ItemPreset {
        id: "dishwasher",
        name: "Dishwasher",
        price: 40_000,
        extent: Extent::new(60.0, 60.0, 85.0),
        color: Color::rgb(0xD3, 0xD3, 0xD3),
    },
];

pub const MATERIALS: [MaterialPreset; 4] = [
    MaterialPreset {
        id: "wood",
        name: "Wood",
        color: WOOD,
    },
    MaterialPreset {
        id: "white",
        name: "White",
        color: Color::white(),
    },
    MaterialPreset {
        id: "gray",
        name: "Gray",
        color: Color::rgb(0x80, 0x80, 0x80),
    },
    MaterialPreset {
        id: "black",
        name: "Black",
        color: Color::rgb(0x2C, 0x2C, 0x2C),
    },
];

pub const TEMPLATES: [RoomTemplate; 3] = [
    RoomTemplate {
        id: "t1",
        name: "Minimal",
        description: "Simple L-shaped kitchen",
        cost: 180_000,
    },
    RoomTemplate {
        id: "t2",
        name: "Studio",
        description: "Compact layout for a studio flat",
        cost: 120_000,
    },
    RoomTemplate {
        id: "t3",
        name: "Premium",
        description: "Large U-shaped kitchen",
        cost: 350_000,
    },
];

/// An item present when the page first opens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedItem {
    pub category: ItemCategory,
    pub position: Point,
    pub preset: ItemPreset,
}

/// Lower cabinet, countertop and fridge. The seeded fridge is shorter than the
/// catalog fridge.
pub const SEED_ITEMS: [SeedItem; 3] = [
    SeedItem {
        category: ItemCategory::Cabinet,
        position: Point::new(20.0, 20.0),
        preset: CABINETS[0],
    },
    SeedItem {
        category: ItemCategory::Countertop,
        position: Point::new(20.0, 10.0),
        preset: ItemPreset {
            id: "countertop",
            name: "Countertop",
            price: 8_000,
            extent: Extent::new(80.0, 60.0, 10.0),
            color: Color::rgb(0xE5, 0xE5, 0xE5),
        },
    },
    SeedItem {
        category: ItemCategory::Appliance,
        position: Point::new(120.0, 20.0),
        preset: ItemPreset {
            extent: Extent::new(60.0, 60.0, 90.0),
            ..APPLIANCES[0]
        },
    },
];

pub fn find_material(id: &str) -> Option<&'static MaterialPreset> {
    MATERIALS.iter().find(|m| m.id == id)
}

pub fn find_preset(id: &str) -> Option<(ItemCategory, &'static ItemPreset)> {
    CABINETS
        .iter()
        .map(|p| (ItemCategory::Cabinet, p))
        .chain(APPLIANCES.iter().map(|p| (ItemCategory::Appliance, p)))
        .find(|(_, p)| p.id == id)
}
