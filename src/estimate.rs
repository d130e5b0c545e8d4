use crate::layout::{LayoutState, PlacedItem, RoomDimensions};

pub const CURRENCY_SIGN: &str = "₽";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub total_cost: u64,
    /// Floor area in square meters
    pub total_area: f64,
    pub item_count: usize,
}

impl Estimate {
    /// Recomputed from scratch on every call; nothing is cached.
    pub fn of(state: &LayoutState) -> Self {
        Self {
            total_cost: total_cost(state.items()),
            total_area: total_area(state.room()),
            item_count: state.items().len(),
        }
    }
}

pub fn total_cost(items: &[PlacedItem]) -> u64 {
    items.iter().map(|item| item.price).sum()
}

/// cm² to m²
pub fn total_area(room: RoomDimensions) -> f64 {
    room.width * room.depth / 10_000.0
}

/// "68,000 ₽"
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{} {}", grouped, CURRENCY_SIGN)
}

/// "12.0 m²"
pub fn format_area(square_meters: f64) -> String {
    format!("{:.1} m²", square_meters)
}
