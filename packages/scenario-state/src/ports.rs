//! Ports between the helper and whatever owns the scenario record.
//!
//! The helper reads through [`ScenarioStateSource`] and writes through
//! [`ScenarioStateActions`]. A store is expected to make a mutation visible
//! to the next read within the same session; the helper does not check.

use crate::domain::state::{ListChoices, ScenarioState, SupplyCounts};
use crate::errors::domain::ScenarioError;

/// Mutation port for one scenario attempt.
///
/// Failures are returned to the caller as-is; the helper never retries.
pub trait ScenarioStateActions {
    fn set_decision(&self, id: &str, value: bool) -> Result<(), ScenarioError>;

    fn set_count(&self, id: &str, value: i64) -> Result<(), ScenarioError>;

    fn set_supplies(&self, id: &str, supply_counts: SupplyCounts) -> Result<(), ScenarioError>;

    fn set_choice_list(&self, id: &str, choices: ListChoices) -> Result<(), ScenarioError>;

    fn set_choice(&self, id: &str, choice: i32) -> Result<(), ScenarioError>;

    /// Clear every mapping of the attempt.
    fn reset_scenario(&self) -> Result<(), ScenarioError>;
}

/// Read access to the current scenario record.
pub trait ScenarioStateSource {
    fn read<R>(&self, f: impl FnOnce(&ScenarioState) -> R) -> R;
}

impl ScenarioStateSource for ScenarioState {
    fn read<R>(&self, f: impl FnOnce(&ScenarioState) -> R) -> R {
        f(self)
    }
}

impl<T: ScenarioStateSource + ?Sized> ScenarioStateSource for &T {
    fn read<R>(&self, f: impl FnOnce(&ScenarioState) -> R) -> R {
        (**self).read(f)
    }
}

impl<T: ScenarioStateActions + ?Sized> ScenarioStateActions for &T {
    fn set_decision(&self, id: &str, value: bool) -> Result<(), ScenarioError> {
        (**self).set_decision(id, value)
    }

    fn set_count(&self, id: &str, value: i64) -> Result<(), ScenarioError> {
        (**self).set_count(id, value)
    }

    fn set_supplies(&self, id: &str, supply_counts: SupplyCounts) -> Result<(), ScenarioError> {
        (**self).set_supplies(id, supply_counts)
    }

    fn set_choice_list(&self, id: &str, choices: ListChoices) -> Result<(), ScenarioError> {
        (**self).set_choice_list(id, choices)
    }

    fn set_choice(&self, id: &str, choice: i32) -> Result<(), ScenarioError> {
        (**self).set_choice(id, choice)
    }

    fn reset_scenario(&self) -> Result<(), ScenarioError> {
        (**self).reset_scenario()
    }
}
