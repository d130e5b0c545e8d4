use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Horizontal footprint plus height, all in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Extent {
    pub const fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Cabinet,
    Countertop,
    Appliance,
    Wall,
}

impl ItemCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::Cabinet => "Cabinet",
            ItemCategory::Countertop => "Countertop",
            ItemCategory::Appliance => "Appliance",
            ItemCategory::Wall => "Wall",
        }
    }
}

/// Side panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Furniture,
    Templates,
    Materials,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [
        ActiveTab::Furniture,
        ActiveTab::Templates,
        ActiveTab::Materials,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ActiveTab::Furniture => "Furniture",
            ActiveTab::Templates => "Templates",
            ActiveTab::Materials => "Materials",
        }
    }
}
