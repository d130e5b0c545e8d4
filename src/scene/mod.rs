mod face;
mod frame;
mod projection;
mod types;

pub use face::*;
pub use frame::*;
pub use projection::*;
pub use types::*;
