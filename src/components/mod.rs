mod catalog_panel;
mod range_control;
mod room_view;
mod summary_panel;

pub use catalog_panel::{CatalogPanel, CatalogPanelProps};
pub use range_control::RangeControl;
pub use room_view::{RoomView, RoomViewProps};
pub use summary_panel::SummaryPanel;
