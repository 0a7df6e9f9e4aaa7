use serde::{Deserialize, Serialize};

/// Working hours assumed when deriving an hourly rate from an annual salary.
pub const HOURS_PER_WEEK: f64 = 40.0;

pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Derive an hourly rate from an annual salary.
///
/// Uses the fixed 40 h/week, 52 weeks/year convention; callers that know the
/// hourly rate directly should pass it through unchanged.
pub fn hourly_rate_from_salary(annual_salary: f64) -> f64 {
    annual_salary / (HOURS_PER_WEEK * WEEKS_PER_YEAR)
}

/// Time-savings assumptions for one role, e.g. area managers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSavings {
    /// Display label for the role.
    pub role: String,
    pub headcount: u32,
    /// Hours saved per week, per person.
    pub hours_saved_per_week: f64,
    pub hourly_rate: f64,
}

impl RoleSavings {
    /// Hours saved per week across everyone in the role.
    pub fn weekly_hours(&self) -> f64 {
        f64::from(self.headcount) * self.hours_saved_per_week
    }

    pub fn weekly_cost_savings(&self) -> f64 {
        self.weekly_hours() * self.hourly_rate
    }

    pub fn annual_cost_savings(&self) -> f64 {
        self.weekly_cost_savings() * WEEKS_PER_YEAR
    }
}

/// Per-role slice of the aggregated summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleBreakdown {
    pub role: String,
    pub weekly_hours: f64,
    pub annual_cost_savings: f64,
}

/// Aggregated time savings across all roles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeSavings {
    pub roles: Vec<RoleBreakdown>,
    pub weekly_hours: f64,
    pub annual_hours: f64,
    pub annual_cost_savings: f64,
}

/// Sum per-role time savings; role contributions are additive.
pub fn time_savings(roles: &[RoleSavings]) -> TimeSavings {
    let mut summary = TimeSavings::default();
    for role in roles {
        let weekly_hours = role.weekly_hours();
        let annual_cost_savings = role.annual_cost_savings();
        summary.weekly_hours += weekly_hours;
        summary.annual_cost_savings += annual_cost_savings;
        summary.roles.push(RoleBreakdown {
            role: role.role.clone(),
            weekly_hours,
            annual_cost_savings,
        });
    }
    summary.annual_hours = summary.weekly_hours * WEEKS_PER_YEAR;
    summary
}

/// Revenue-improvement assumptions across the dealer network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceInputs {
    /// Average annual revenue per dealer location.
    pub average_annual_revenue: f64,
    /// Expected improvement, in percent (1.5 means 1.5 %).
    pub improvement_percentage: f64,
}

/// Revenue impact of the assumed performance improvement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerformanceImprovement {
    pub total_annual_revenue: f64,
    pub per_dealer_improvement: f64,
    pub annual_improvement: f64,
}

pub fn performance_improvement(dealers: i64, inputs: &PerformanceInputs) -> PerformanceImprovement {
    let total_annual_revenue = dealers as f64 * inputs.average_annual_revenue;
    let factor = inputs.improvement_percentage / 100.0;
    PerformanceImprovement {
        total_annual_revenue,
        per_dealer_improvement: inputs.average_annual_revenue * factor,
        annual_improvement: total_annual_revenue * factor,
    }
}
