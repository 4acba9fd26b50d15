use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-entity multi-valued selections for one step (entity code → values).
pub type ListChoices = BTreeMap<String, Vec<i32>>;

/// Supply tallies for one step (investigator code → supply id → count).
pub type SupplyCounts = BTreeMap<String, BTreeMap<String, i32>>;

/// Recorded input for a single scenario attempt.
///
/// Every mapping is keyed by step id. A step that was never answered has no
/// key at all; a present key holding `0` or `false` is a real answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioState {
    /// Yes/no answers.
    #[serde(default)]
    pub decisions: BTreeMap<String, bool>,
    /// Numeric answers such as resource tallies.
    #[serde(default)]
    pub counts: BTreeMap<String, i64>,
    /// Single-selection answers: an index into the step's option list.
    #[serde(default)]
    pub choices: BTreeMap<String, i32>,
    /// Per-entity selections, e.g. one status index sequence per investigator.
    #[serde(default)]
    pub list_choices: BTreeMap<String, ListChoices>,
    /// Structured tallies for supply-tracking steps.
    #[serde(default)]
    pub supply_counts: BTreeMap<String, SupplyCounts>,
}

impl ScenarioState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Drop every recorded answer for this attempt.
    pub fn reset(&mut self) {
        self.decisions.clear();
        self.counts.clear();
        self.choices.clear();
        self.list_choices.clear();
        self.supply_counts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
            && self.counts.is_empty()
            && self.choices.is_empty()
            && self.list_choices.is_empty()
            && self.supply_counts.is_empty()
    }
}

/// Conventional step id for a step local to one scenario.
///
/// Step ids are opaque to the tracker; this only mirrors how guide drivers
/// usually namespace them (`"{scenario}_{local}"`).
pub fn step_id(scenario_id: &str, local_name: &str) -> String {
    format!("{scenario_id}_{local_name}")
}
