use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::EngineError;
use crate::modules::ModuleId;
use crate::pricing::models::ModuleCost;

/// A scale band with its own per-module rate card.
#[derive(Debug, Clone, Serialize)]
pub struct PricingTier {
    /// Display label, e.g. "1-100".
    pub label: String,
    /// Inclusive upper bound of the band; `None` on the unbounded top tier.
    pub max_scale: Option<i64>,
    pub costs: BTreeMap<ModuleId, ModuleCost>,
}

impl PricingTier {
    /// Cost entry for a module; a missing entry contributes nothing to a
    /// quote.
    pub fn module_cost(&self, module: ModuleId) -> Option<ModuleCost> {
        self.costs.get(&module).copied()
    }
}

/// Totally ordered tier list covering every scale value.
///
/// Invariants, enforced by [`PricingTable::new`]: at least one tier, strictly
/// ascending upper bounds, exactly the last tier unbounded, every catalog
/// module priced in every tier at a non-negative cost, and per-module costs
/// non-decreasing from each tier to the next.
#[derive(Debug, Clone, Serialize)]
pub struct PricingTable {
    tiers: Vec<PricingTier>,
}

impl PricingTable {
    /// Build a table from a tier list, enforcing the rate-card invariants.
    pub fn new(tiers: Vec<PricingTier>) -> Result<Self, EngineError> {
        validate(&tiers)?;
        Ok(Self { tiers })
    }

    /// The built-in list rate card.
    pub fn builtin() -> Self {
        Self {
            tiers: vec![
                tier("1-100", Some(100), [
                    (12_500.0, 1_750.0),
                    (8_000.0, 1_500.0),
                    (8_000.0, 1_250.0),
                    (600.0, 1_000.0),
                    (600.0, 1_250.0),
                    (600.0, 1_500.0),
                ]),
                tier("101-250", Some(250), [
                    (15_000.0, 2_000.0),
                    (11_000.0, 1_750.0),
                    (11_000.0, 1_500.0),
                    (700.0, 1_250.0),
                    (700.0, 1_500.0),
                    (700.0, 1_750.0),
                ]),
                tier("251-500", Some(500), [
                    (17_500.0, 2_250.0),
                    (13_000.0, 2_000.0),
                    (13_000.0, 1_750.0),
                    (800.0, 1_500.0),
                    (800.0, 1_750.0),
                    (800.0, 2_000.0),
                ]),
                tier("501-1000", Some(1_000), [
                    (20_000.0, 2_500.0),
                    (15_000.0, 2_500.0),
                    (15_000.0, 2_250.0),
                    (900.0, 1_750.0),
                    (900.0, 2_000.0),
                    (900.0, 2_250.0),
                ]),
                tier("1000+", None, [
                    (25_000.0, 3_000.0),
                    (18_000.0, 3_000.0),
                    (18_000.0, 2_750.0),
                    (1_100.0, 2_000.0),
                    (1_100.0, 2_500.0),
                    (1_100.0, 2_750.0),
                ]),
            ],
        }
    }

    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    /// Resolve the tier containing `scale`.
    ///
    /// Bounds are inclusive: a scale of exactly 100 is in the first band and
    /// 101 in the second. Zero and negative values fall into the first band;
    /// anything above every bound lands in the unbounded top tier. No value
    /// is rejected.
    pub fn resolve_tier(&self, scale: i64) -> &PricingTier {
        self.tiers
            .iter()
            .find(|tier| tier.max_scale.map_or(true, |max| scale <= max))
            .unwrap_or_else(|| &self.tiers[self.tiers.len() - 1])
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Per-module (setup, monthly) pairs in catalog order.
fn tier(label: &str, max_scale: Option<i64>, costs: [(f64, f64); 6]) -> PricingTier {
    let costs = ModuleId::ALL
        .into_iter()
        .zip(costs)
        .map(|(module, (setup, monthly))| (module, ModuleCost { setup, monthly }))
        .collect();
    PricingTier {
        label: label.to_string(),
        max_scale,
        costs,
    }
}

fn validate(tiers: &[PricingTier]) -> Result<(), EngineError> {
    if tiers.is_empty() {
        return Err(EngineError::InvalidRateCard("rate card has no tiers".to_string()));
    }

    let mut previous_bound: Option<i64> = None;
    for (index, tier) in tiers.iter().enumerate() {
        let is_last = index == tiers.len() - 1;
        match tier.max_scale {
            Some(bound) => {
                if is_last {
                    return Err(EngineError::InvalidRateCard(format!(
                        "top tier '{}' must be unbounded",
                        tier.label
                    )));
                }
                if let Some(previous) = previous_bound {
                    if bound <= previous {
                        return Err(EngineError::InvalidRateCard(format!(
                            "tier bounds must be strictly ascending, '{}' is not",
                            tier.label
                        )));
                    }
                }
                previous_bound = Some(bound);
            }
            None => {
                if !is_last {
                    return Err(EngineError::InvalidRateCard(format!(
                        "only the top tier may be unbounded, '{}' is not last",
                        tier.label
                    )));
                }
            }
        }

        for module in ModuleId::ALL {
            match tier.module_cost(module) {
                Some(cost) => {
                    if cost.setup < 0.0 || cost.monthly < 0.0 {
                        return Err(EngineError::InvalidRateCard(format!(
                            "tier '{}' has a negative cost for module '{}'",
                            tier.label, module
                        )));
                    }
                }
                None => {
                    return Err(EngineError::InvalidRateCard(format!(
                        "tier '{}' has no price for module '{}'",
                        tier.label, module
                    )));
                }
            }
        }
    }

    for pair in tiers.windows(2) {
        for module in ModuleId::ALL {
            let (Some(lower), Some(upper)) = (pair[0].module_cost(module), pair[1].module_cost(module))
            else {
                continue;
            };
            if upper.setup < lower.setup || upper.monthly < lower.monthly {
                return Err(EngineError::InvalidRateCard(format!(
                    "costs for module '{}' decrease from tier '{}' to '{}'",
                    module, pair[0].label, pair[1].label
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_satisfies_invariants() {
        let table = PricingTable::builtin();
        assert!(PricingTable::new(table.tiers.clone()).is_ok());
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let table = PricingTable::builtin();
        assert_eq!(table.resolve_tier(100).label, "1-100");
        assert_eq!(table.resolve_tier(101).label, "101-250");
        assert_eq!(table.resolve_tier(250).label, "101-250");
        assert_eq!(table.resolve_tier(251).label, "251-500");
        assert_eq!(table.resolve_tier(1000).label, "501-1000");
        assert_eq!(table.resolve_tier(1001).label, "1000+");
    }

    #[test]
    fn test_zero_and_negative_scale_fall_into_first_band() {
        let table = PricingTable::builtin();
        assert_eq!(table.resolve_tier(0).label, "1-100");
        assert_eq!(table.resolve_tier(-25).label, "1-100");
    }

    #[test]
    fn test_large_scale_lands_in_top_tier() {
        let table = PricingTable::builtin();
        assert_eq!(table.resolve_tier(i64::MAX).label, "1000+");
    }

    #[test]
    fn test_empty_rate_card_is_rejected() {
        let err = PricingTable::new(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("no tiers"));
    }

    #[test]
    fn test_bounded_top_tier_is_rejected() {
        let table = PricingTable::builtin();
        let mut tiers = table.tiers.clone();
        if let Some(last) = tiers.last_mut() {
            last.max_scale = Some(5_000);
        }
        let err = PricingTable::new(tiers).unwrap_err();
        assert!(err.to_string().contains("must be unbounded"));
    }

    #[test]
    fn test_descending_bounds_are_rejected() {
        let table = PricingTable::builtin();
        let mut tiers = table.tiers.clone();
        tiers[1].max_scale = Some(50);
        let err = PricingTable::new(tiers).unwrap_err();
        assert!(err.to_string().contains("ascending"));
    }

    #[test]
    fn test_missing_module_price_is_rejected() {
        let table = PricingTable::builtin();
        let mut tiers = table.tiers.clone();
        tiers[2].costs.remove(&ModuleId::Visits);
        let err = PricingTable::new(tiers).unwrap_err();
        assert!(err.to_string().contains("no price for module 'visits'"));
    }

    #[test]
    fn test_decreasing_costs_across_tiers_are_rejected() {
        let table = PricingTable::builtin();
        let mut tiers = table.tiers.clone();
        if let Some(cost) = tiers[3].costs.get_mut(&ModuleId::Core) {
            cost.monthly = 10.0;
        }
        let err = PricingTable::new(tiers).unwrap_err();
        assert!(err.to_string().contains("decrease"));
    }
}
