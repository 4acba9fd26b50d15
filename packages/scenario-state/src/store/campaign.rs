//! Campaign-scoped registry of scenario records.
//!
//! Each scenario attempt in a campaign gets its own [`ScenarioState`]; a
//! [`ScenarioSlot`] binds the ports to exactly one of them, so a helper built
//! on a slot can never read or reset another scenario's answers.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::domain::state::{ListChoices, ScenarioState, SupplyCounts};
use crate::errors::domain::ScenarioError;
use crate::ports::{ScenarioStateActions, ScenarioStateSource};

static EMPTY: ScenarioState = ScenarioState {
    decisions: BTreeMap::new(),
    counts: BTreeMap::new(),
    choices: BTreeMap::new(),
    list_choices: BTreeMap::new(),
    supply_counts: BTreeMap::new(),
};

#[derive(Debug)]
pub struct CampaignScenarioStore {
    campaign_id: String,
    scenarios: RwLock<BTreeMap<String, ScenarioState>>,
}

impl CampaignScenarioStore {
    pub fn new(campaign_id: impl Into<String>) -> Self {
        Self::from_scenarios(campaign_id, BTreeMap::new())
    }

    pub fn from_scenarios(
        campaign_id: impl Into<String>,
        scenarios: BTreeMap<String, ScenarioState>,
    ) -> Self {
        Self {
            campaign_id: campaign_id.into(),
            scenarios: RwLock::new(scenarios),
        }
    }

    pub fn campaign_id(&self) -> &str {
        &self.campaign_id
    }

    /// Ports for one scenario. Nothing is stored until the first write.
    pub fn scenario<'a>(&'a self, scenario_id: &'a str) -> ScenarioSlot<'a> {
        ScenarioSlot {
            store: self,
            scenario_id,
        }
    }

    /// Scenarios with a record, in sorted order.
    pub fn scenario_ids(&self) -> Vec<String> {
        self.scenarios.read().keys().cloned().collect()
    }

    pub fn snapshot(&self) -> BTreeMap<String, ScenarioState> {
        self.scenarios.read().clone()
    }
}

/// Ports bound to one scenario of a [`CampaignScenarioStore`].
#[derive(Debug, Clone, Copy)]
pub struct ScenarioSlot<'a> {
    store: &'a CampaignScenarioStore,
    scenario_id: &'a str,
}

impl ScenarioSlot<'_> {
    pub fn scenario_id(&self) -> &str {
        self.scenario_id
    }

    fn update(&self, f: impl FnOnce(&mut ScenarioState)) -> Result<(), ScenarioError> {
        let mut scenarios = self.store.scenarios.write();
        f(scenarios.entry(self.scenario_id.to_owned()).or_default());
        Ok(())
    }
}

impl ScenarioStateSource for ScenarioSlot<'_> {
    fn read<R>(&self, f: impl FnOnce(&ScenarioState) -> R) -> R {
        let scenarios = self.store.scenarios.read();
        f(scenarios.get(self.scenario_id).unwrap_or(&EMPTY))
    }
}

impl ScenarioStateActions for ScenarioSlot<'_> {
    fn set_decision(&self, id: &str, value: bool) -> Result<(), ScenarioError> {
        self.update(|s| {
            s.decisions.insert(id.to_owned(), value);
        })
    }

    fn set_count(&self, id: &str, value: i64) -> Result<(), ScenarioError> {
        self.update(|s| {
            s.counts.insert(id.to_owned(), value);
        })
    }

    fn set_supplies(&self, id: &str, supply_counts: SupplyCounts) -> Result<(), ScenarioError> {
        self.update(|s| {
            s.supply_counts.insert(id.to_owned(), supply_counts);
        })
    }

    fn set_choice_list(&self, id: &str, choices: ListChoices) -> Result<(), ScenarioError> {
        self.update(|s| {
            s.list_choices.insert(id.to_owned(), choices);
        })
    }

    fn set_choice(&self, id: &str, choice: i32) -> Result<(), ScenarioError> {
        self.update(|s| {
            s.choices.insert(id.to_owned(), choice);
        })
    }

    fn reset_scenario(&self) -> Result<(), ScenarioError> {
        self.update(ScenarioState::reset)
    }
}
