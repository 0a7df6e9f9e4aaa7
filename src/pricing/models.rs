use serde::{Deserialize, Serialize};

/// Per-module pricing within a single tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModuleCost {
    /// One-time setup cost.
    pub setup: f64,
    /// Recurring monthly license cost.
    pub monthly: f64,
}

/// Cost breakdown for a quote
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// One-time setup fee, incurred in year one only.
    pub setup_fee: f64,
    /// Recurring yearly license cost (monthly fees × 12).
    pub annual_license: f64,
    /// Setup fee plus one year of license cost.
    pub first_year_total: f64,
}

impl CostBreakdown {
    /// Create a zero-cost breakdown
    pub fn zero() -> Self {
        Self::default()
    }

    /// Derive the annual and first-year figures from accumulated fees
    pub fn from_fees(setup_fee: f64, monthly_fee: f64) -> Self {
        let annual_license = monthly_fee * 12.0;
        Self {
            setup_fee,
            annual_license,
            first_year_total: setup_fee + annual_license,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_year_total_is_setup_plus_license() {
        let costs = CostBreakdown::from_fees(20500.0, 3000.0);
        assert_eq!(costs.setup_fee, 20500.0);
        assert_eq!(costs.annual_license, 36000.0);
        assert_eq!(costs.first_year_total, costs.setup_fee + costs.annual_license);
    }

    #[test]
    fn test_zero_breakdown() {
        let costs = CostBreakdown::zero();
        assert_eq!(costs.setup_fee, 0.0);
        assert_eq!(costs.annual_license, 0.0);
        assert_eq!(costs.first_year_total, 0.0);
    }
}
