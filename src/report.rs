use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::benefits::{self, PerformanceImprovement, PerformanceInputs, RoleSavings, TimeSavings};
use crate::error::EngineError;
use crate::modules::{ModuleId, ModuleSelection};
use crate::pricing::{CostBreakdown, CostCalculator};
use crate::roi::{self, RoiMetrics};

/// A snapshot of every assumption behind a business case
///
/// Scenarios are plain TOML files so a quote can be reproduced later from
/// the same inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Number of dealer locations in the network.
    pub dealers: i64,
    /// Selected module identifiers; unknown ids are ignored and `core` is
    /// always included.
    #[serde(default)]
    pub modules: Vec<String>,
    /// Per-role time-savings assumptions.
    #[serde(default)]
    pub time_savings: Vec<RoleSavings>,
    #[serde(default)]
    pub performance: PerformanceInputs,
}

impl Scenario {
    pub fn from_toml(source: &str) -> Result<Self, EngineError> {
        Ok(toml::from_str(source)?)
    }

    pub fn selection(&self) -> ModuleSelection {
        ModuleSelection::parse(&self.modules)
    }
}

/// Fully assembled business case for a scenario
#[derive(Debug, Clone, Serialize)]
pub struct BusinessCase {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub dealers: i64,
    /// Label of the resolved pricing tier.
    pub tier: String,
    pub modules: Vec<ModuleId>,
    pub costs: CostBreakdown,
    pub time_savings: TimeSavings,
    pub performance: PerformanceImprovement,
    pub metrics: RoiMetrics,
}

/// Evaluate a scenario against a rate card
pub fn build_business_case(calculator: &CostCalculator, scenario: &Scenario) -> BusinessCase {
    let selection = scenario.selection();
    let costs = calculator.cost_breakdown(scenario.dealers, &selection);
    let time_savings = benefits::time_savings(&scenario.time_savings);
    let performance = benefits::performance_improvement(scenario.dealers, &scenario.performance);
    let metrics = roi::roi_metrics(
        &costs,
        time_savings.annual_cost_savings,
        performance.annual_improvement,
    );

    BusinessCase {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        dealers: scenario.dealers,
        tier: calculator.resolve_tier(scenario.dealers).label.clone(),
        modules: selection.iter().collect(),
        costs,
        time_savings,
        performance,
        metrics,
    }
}
