//! Single-attempt store backed by a lock-protected [`ScenarioState`].

use parking_lot::RwLock;

use crate::domain::state::{ListChoices, ScenarioState, SupplyCounts};
use crate::errors::domain::ScenarioError;
use crate::ports::{ScenarioStateActions, ScenarioStateSource};

/// Holds one scenario record; every mutation is visible to the next read.
#[derive(Debug, Default)]
pub struct MemoryScenarioStore {
    state: RwLock<ScenarioState>,
}

impl MemoryScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: ScenarioState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }

    /// Copy of the current record, e.g. for handing to a persistence layer.
    pub fn snapshot(&self) -> ScenarioState {
        self.state.read().clone()
    }

    pub fn into_inner(self) -> ScenarioState {
        self.state.into_inner()
    }

    /// Swap in a whole record, returning the previous one.
    pub fn replace(&self, state: ScenarioState) -> ScenarioState {
        std::mem::replace(&mut *self.state.write(), state)
    }

    fn update(&self, f: impl FnOnce(&mut ScenarioState)) -> Result<(), ScenarioError> {
        f(&mut *self.state.write());
        Ok(())
    }
}

impl ScenarioStateSource for MemoryScenarioStore {
    fn read<R>(&self, f: impl FnOnce(&ScenarioState) -> R) -> R {
        f(&*self.state.read())
    }
}

impl ScenarioStateActions for MemoryScenarioStore {
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
