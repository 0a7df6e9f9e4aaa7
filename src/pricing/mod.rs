pub mod calculator;
pub mod loader;
pub mod models;
pub mod tiers;

pub use calculator::CostCalculator;
pub use loader::{load_rate_card, parse_rate_card};
pub use models::{CostBreakdown, ModuleCost};
pub use tiers::{PricingTable, PricingTier};
