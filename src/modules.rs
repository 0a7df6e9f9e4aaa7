use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Product modules available on the platform.
///
/// `Core` is the platform itself and is part of every selection; the
/// remaining modules are optional add-ons priced per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    Core,
    Dashboard,
    Scorecard,
    Action,
    Visits,
    Surveys,
}

impl ModuleId {
    /// The full catalog, in display order.
    pub const ALL: [ModuleId; 6] = [
        ModuleId::Core,
        ModuleId::Dashboard,
        ModuleId::Scorecard,
        ModuleId::Action,
        ModuleId::Visits,
        ModuleId::Surveys,
    ];

    /// Stable identifier used in selections, rate cards and scenario files.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Dashboard => "dashboard",
            Self::Scorecard => "scorecard",
            Self::Action => "action",
            Self::Visits => "visits",
            Self::Surveys => "surveys",
        }
    }

    /// Human-readable name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Core => "Core Platform",
            Self::Dashboard => "Dashboard",
            Self::Scorecard => "Scorecard",
            Self::Action => "Action Centre",
            Self::Visits => "Visits",
            Self::Surveys => "Surveys",
        }
    }

    /// Whether the module is mandatory and cannot be deselected.
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Core)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Module identifier outside the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown module id: {0}")]
pub struct UnknownModule(pub String);

impl FromStr for ModuleId {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "core" => Ok(Self::Core),
            "dashboard" => Ok(Self::Dashboard),
            "scorecard" => Ok(Self::Scorecard),
            "action" => Ok(Self::Action),
            "visits" => Ok(Self::Visits),
            "surveys" => Ok(Self::Surveys),
            _ => Err(UnknownModule(s.to_string())),
        }
    }
}

/// An order-insensitive, duplicate-free module selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleSelection(BTreeSet<ModuleId>);

impl ModuleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse caller-supplied module identifiers.
    ///
    /// Unknown identifiers are dropped with a warning and contribute nothing
    /// downstream. The core platform is re-added if missing: it is mandatory
    /// and the selection surface cannot deselect it.
    pub fn parse<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for raw in ids {
            match raw.as_ref().trim().parse::<ModuleId>() {
                Ok(module) => {
                    selection.0.insert(module);
                }
                Err(UnknownModule(id)) => warn!(module = %id, "ignoring unknown module id"),
            }
        }
        selection.0.insert(ModuleId::Core);
        selection
    }

    pub fn insert(&mut self, module: ModuleId) -> bool {
        self.0.insert(module)
    }

    pub fn contains(&self, module: ModuleId) -> bool {
        self.0.contains(&module)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Selected modules in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ModuleId> for ModuleSelection {
    fn from_iter<I: IntoIterator<Item = ModuleId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for module in ModuleId::ALL {
            assert_eq!(module.id().parse::<ModuleId>(), Ok(module));
        }
    }

    #[test]
    fn test_unknown_id_is_rejected() {
        let err = "bogus".parse::<ModuleId>().unwrap_err();
        assert_eq!(err, UnknownModule("bogus".to_string()));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Scorecard".parse::<ModuleId>(), Ok(ModuleId::Scorecard));
    }

    #[test]
    fn test_selection_always_contains_core() {
        let selection = ModuleSelection::parse(["scorecard"]);
        assert!(selection.contains(ModuleId::Core));
        assert!(selection.contains(ModuleId::Scorecard));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_selection_drops_unknown_ids() {
        let with_bogus = ModuleSelection::parse(["core", "bogus"]);
        let without = ModuleSelection::parse(["core"]);
        assert_eq!(with_bogus, without);
    }

    #[test]
    fn test_selection_deduplicates_and_trims() {
        let selection = ModuleSelection::parse(["core", " core ", "visits", "visits"]);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_only_core_is_required() {
        let required: Vec<ModuleId> = ModuleId::ALL
            .into_iter()
            .filter(ModuleId::is_required)
            .collect();
        assert_eq!(required, vec![ModuleId::Core]);
    }
}
