use serde::Serialize;

use crate::pricing::CostBreakdown;

/// Derived ROI figures for a quote
///
/// Ratios are plain fractions (1.655 means 165.5 %); percent formatting
/// belongs to the presentation layer. A `None` metric means the divisor was
/// zero and the figure is undefined; callers render a fallback such as "N/A".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiMetrics {
    pub total_annual_benefit: f64,
    /// (benefit - first-year total) / first-year total.
    pub first_year_roi: Option<f64>,
    /// (benefit - annual license) / annual license.
    pub ongoing_annual_roi: Option<f64>,
    /// First-year total / monthly benefit.
    pub payback_period_months: Option<f64>,
}

/// Combine a cost breakdown with annual benefit estimates
pub fn roi_metrics(
    costs: &CostBreakdown,
    annual_time_savings: f64,
    annual_performance_improvement: f64,
) -> RoiMetrics {
    let total_annual_benefit = annual_time_savings + annual_performance_improvement;
    RoiMetrics {
        total_annual_benefit,
        first_year_roi: ratio(
            total_annual_benefit - costs.first_year_total,
            costs.first_year_total,
        ),
        ongoing_annual_roi: ratio(
            total_annual_benefit - costs.annual_license,
            costs.annual_license,
        ),
        payback_period_months: ratio(costs.first_year_total, total_annual_benefit / 12.0),
    }
}

/// Division with an explicit undefined result instead of `inf`/`NaN`.
fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}
