//! Price history input
//!
//! - `PriceSeries`: validated chronological prices
//! - `loader`: CSV closing-price reader

mod prices;
pub mod loader;

pub use prices::PriceSeries;
pub use loader::{load_closing_prices, read_closing_prices, DEFAULT_CLOSE_COLUMN};
