use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::EngineError;
use crate::modules::ModuleId;
use crate::pricing::models::ModuleCost;
use crate::pricing::tiers::{PricingTable, PricingTier};

/// On-disk rate card: a list of `[[tier]]` entries
#[derive(Debug, Deserialize)]
struct RateCardFile {
    #[serde(rename = "tier")]
    tiers: Vec<TierEntry>,
}

#[derive(Debug, Deserialize)]
struct TierEntry {
    label: String,
    /// Inclusive upper bound; omitted on the top tier.
    max_scale: Option<i64>,
    modules: BTreeMap<String, CostEntry>,
}

#[derive(Debug, Deserialize)]
struct CostEntry {
    setup: f64,
    monthly: f64,
}

/// Parse a TOML rate card and validate the tier invariants
///
/// Module keys outside the catalog are skipped so a shared rate card can
/// carry entries for modules this build does not sell.
pub fn parse_rate_card(source: &str) -> Result<PricingTable, EngineError> {
    let file: RateCardFile = toml::from_str(source)?;

    let mut tiers = Vec::with_capacity(file.tiers.len());
    for entry in file.tiers {
        let mut costs = BTreeMap::new();
        for (key, cost) in entry.modules {
            match key.parse::<ModuleId>() {
                Ok(module) => {
                    costs.insert(
                        module,
                        ModuleCost {
                            setup: cost.setup,
                            monthly: cost.monthly,
                        },
                    );
                }
                Err(_) => warn!(tier = %entry.label, module = %key, "skipping unknown module in rate card"),
            }
        }
        tiers.push(PricingTier {
            label: entry.label,
            max_scale: entry.max_scale,
            costs,
        });
    }

    let table = PricingTable::new(tiers)?;
    info!(tiers = table.tiers().len(), "loaded custom rate card");
    Ok(table)
}

/// Read and parse a rate card file
pub fn load_rate_card(path: &Path) -> Result<PricingTable, EngineError> {
    let source = fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rate_card(&source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::ModuleSelection;
    use crate::pricing::CostCalculator;

    fn flat_tier(label: &str, max_scale: Option<&str>, setup: f64, monthly: f64) -> String {
        let bound = max_scale
            .map(|value| format!("max_scale = {value}\n"))
            .unwrap_or_default();
        let modules = ModuleId::ALL
            .into_iter()
            .map(|module| format!("{module} = {{ setup = {setup:.1}, monthly = {monthly:.1} }}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!("[[tier]]\nlabel = \"{label}\"\n{bound}\n[tier.modules]\n{modules}\n")
    }

    #[test]
    fn test_parse_minimal_rate_card() {
        let source = format!(
            "{}{}",
            flat_tier("1-50", Some("50"), 1_000.0, 100.0),
            flat_tier("50+", None, 2_000.0, 200.0),
        );

        let table = parse_rate_card(&source).unwrap();
        assert_eq!(table.tiers().len(), 2);
        assert_eq!(table.resolve_tier(50).label, "1-50");
        assert_eq!(table.resolve_tier(51).label, "50+");

        let calculator = CostCalculator::new(table);
        let costs = calculator.cost_breakdown(10, &ModuleSelection::parse(["core"]));
        assert_eq!(costs.setup_fee, 1_000.0);
        assert_eq!(costs.annual_license, 1_200.0);
    }

    #[test]
    fn test_unknown_module_keys_are_skipped() {
        let source = format!(
            "{}extras = {{ setup = 1.0, monthly = 1.0 }}\n{}",
            flat_tier("1-50", Some("50"), 1_000.0, 100.0),
            flat_tier("50+", None, 2_000.0, 200.0),
        );

        let table = parse_rate_card(&source).unwrap();
        assert_eq!(table.resolve_tier(10).costs.len(), ModuleId::ALL.len());
    }

    #[test]
    fn test_missing_module_is_rejected() {
        let source = concat!(
            "[[tier]]\nlabel = \"all\"\n\n[tier.modules]\n",
            "core = { setup = 1000.0, monthly = 100.0 }\n",
        );

        let err = parse_rate_card(source).unwrap_err();
        assert!(err.to_string().contains("no price for module"));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = parse_rate_card("[[tier]\nlabel = ").unwrap_err();
        assert!(matches!(err, EngineError::Toml(_)));
    }

    #[test]
    fn test_descending_bounds_are_rejected() {
        let source = format!(
            "{}{}{}",
            flat_tier("1-100", Some("100"), 1_000.0, 100.0),
            flat_tier("backwards", Some("50"), 1_000.0, 100.0),
            flat_tier("top", None, 2_000.0, 200.0),
        );

        let err = parse_rate_card(&source).unwrap_err();
        assert!(err.to_string().contains("ascending"));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = load_rate_card(Path::new("does-not-exist.toml")).unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
    }
}
