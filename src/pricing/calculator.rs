use tracing::debug;

use crate::modules::ModuleSelection;
use crate::pricing::models::CostBreakdown;
use crate::pricing::tiers::{PricingTable, PricingTier};

/// Calculator for pricing a module selection against a rate card
///
/// Holds the rate card and nothing else. Every call is a fresh, total
/// computation over explicit arguments, so identical inputs always produce
/// identical outputs.
pub struct CostCalculator {
    table: PricingTable,
}

impl CostCalculator {
    /// Create a calculator over a validated rate card
    pub fn new(table: PricingTable) -> Self {
        Self { table }
    }

    /// Create a calculator over the built-in list prices
    pub fn with_builtin_rates() -> Self {
        Self::new(PricingTable::builtin())
    }

    pub fn table(&self) -> &PricingTable {
        &self.table
    }

    /// Resolve the pricing tier for a network size
    pub fn resolve_tier(&self, scale: i64) -> &PricingTier {
        self.table.resolve_tier(scale)
    }

    /// Cost breakdown for `scale` locations and the selected modules
    ///
    /// Accumulates setup and monthly fees per selected module in the resolved
    /// tier. A module missing from the tier's price list contributes nothing
    /// rather than failing the quote.
    pub fn cost_breakdown(&self, scale: i64, selection: &ModuleSelection) -> CostBreakdown {
        let tier = self.table.resolve_tier(scale);

        let mut setup_fee = 0.0;
        let mut monthly_fee = 0.0;
        for module in selection.iter() {
            if let Some(cost) = tier.module_cost(module) {
                setup_fee += cost.setup;
                monthly_fee += cost.monthly;
            }
        }

        debug!(scale, tier = %tier.label, modules = selection.len(), "computed cost breakdown");
        CostBreakdown::from_fees(setup_fee, monthly_fee)
    }
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::with_builtin_rates()
    }
}
