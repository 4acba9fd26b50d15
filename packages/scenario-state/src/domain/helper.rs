//! Typed query/mutation facade over one scenario attempt.
//!
//! The guide driver asks `has_step_input` before prompting, reads recorded
//! answers through the getters, and writes new answers through the setters.
//! The helper stores and reports; it never validates an answer against the
//! options a step offers.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::state::{step_id, ListChoices, SupplyCounts};
use super::status::{InvestigatorResolutionStatus, INVESTIGATOR_STATUS_ID};
use crate::errors::domain::{InfraErrorKind, NotFoundKind, ScenarioError};
use crate::ports::{ScenarioStateActions, ScenarioStateSource};

/// Kind of input recorded for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StepInputKind {
    Decision,
    Count,
    Choice,
    ChoiceList,
    Supplies,
}

/// Facade over one [`ScenarioState`](super::state::ScenarioState).
///
/// `S` supplies reads and `A` applies mutations. Both are usually the same
/// store, passed by reference twice:
///
/// ```rust
/// use scenario_state::{MemoryScenarioStore, ScenarioStateHelper};
///
/// let store = MemoryScenarioStore::new();
/// let helper = ScenarioStateHelper::new("tnotz", &store, &store, 2);
/// assert!(!helper.has_step_input("tnotz_intro"));
/// helper.set_decision("tnotz_intro", true).unwrap();
/// assert_eq!(helper.decision("tnotz_intro"), Some(true));
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioStateHelper<S, A> {
    scenario_id: String,
    state: S,
    actions: A,
    num_players: u8,
}

impl<S, A> ScenarioStateHelper<S, A>
where
    S: ScenarioStateSource,
    A: ScenarioStateActions,
{
    pub fn new(scenario_id: impl Into<String>, state: S, actions: A, num_players: u8) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            state,
            actions,
            num_players,
        }
    }

    pub fn scenario_id(&self) -> &str {
        &self.scenario_id
    }

    /// Player count fixed at construction.
    pub fn player_count(&self) -> u8 {
        self.num_players
    }

    pub fn reset_scenario(&self) -> Result<(), ScenarioError> {
        info!(scenario_id = %self.scenario_id, "Resetting scenario");
        self.actions.reset_scenario()
    }

    /// Choice recorded at `"{scenario}_investigator"`, if any.
    pub fn lead_investigator_choice(&self) -> Option<i32> {
        self.choice(&step_id(&self.scenario_id, "investigator"))
    }

    /// Map each investigator with a recorded status to its named status.
    ///
    /// Returns an empty map when no statuses were recorded. An empty index
    /// sequence or an index outside the status table is reported as data
    /// corruption rather than guessed at.
    pub fn investigator_resolution_status(
        &self,
    ) -> Result<BTreeMap<String, InvestigatorResolutionStatus>, ScenarioError> {
        self.state.read(|state| {
            let Some(statuses) = state.list_choices.get(INVESTIGATOR_STATUS_ID) else {
                return Ok(BTreeMap::new());
            };
            statuses
                .iter()
                .map(|(code, choices)| -> Result<_, ScenarioError> {
                    let status = choices
                        .first()
                        .and_then(|&index| InvestigatorResolutionStatus::from_index(index))
                        .ok_or_else(|| {
                            warn!(
                                scenario_id = %self.scenario_id,
                                investigator = %code,
                                ?choices,
                                "Unreadable investigator status"
                            );
                            ScenarioError::infra(
                                InfraErrorKind::DataCorruption,
                                format!("investigator {code} has no valid status in {choices:?}"),
                            )
                        })?;
                    Ok((code.clone(), status))
                })
                .collect()
        })
    }

    /// True if any kind of input was recorded for `id`.
    pub fn has_step_input(&self, id: &str) -> bool {
        self.has_choice(id)
            || self.has_decision(id)
            || self.has_choice_list(id)
            || self.has_supplies(id)
            || self.has_count(id)
    }

    /// Every input kind recorded for `id`, in a fixed order.
    pub fn step_input_kinds(&self, id: &str) -> Vec<StepInputKind> {
        [
            (StepInputKind::Decision, self.has_decision(id)),
            (StepInputKind::Count, self.has_count(id)),
            (StepInputKind::Choice, self.has_choice(id)),
            (StepInputKind::ChoiceList, self.has_choice_list(id)),
            (StepInputKind::Supplies, self.has_supplies(id)),
        ]
        .into_iter()
        .filter_map(|(kind, present)| present.then_some(kind))
        .collect()
    }

    pub fn set_choice(&self, id: &str, value: i32) -> Result<(), ScenarioError> {
        debug!(scenario_id = %self.scenario_id, step_id = id, value, "Recording choice");
        self.actions.set_choice(id, value)
    }

    pub fn has_choice(&self, id: &str) -> bool {
        self.state.read(|s| s.choices.contains_key(id))
    }

    pub fn choice(&self, id: &str) -> Option<i32> {
        self.state.read(|s| s.choices.get(id).copied())
    }

    pub fn require_choice(&self, id: &str) -> Result<i32, ScenarioError> {
        self.choice(id).ok_or_else(|| missing("choice", id))
    }

    pub fn set_choice_list(&self, id: &str, value: ListChoices) -> Result<(), ScenarioError> {
        debug!(
            scenario_id = %self.scenario_id,
            step_id = id,
            entries = value.len(),
            "Recording choice list"
        );
        self.actions.set_choice_list(id, value)
    }

    pub fn has_choice_list(&self, id: &str) -> bool {
        self.state.read(|s| s.list_choices.contains_key(id))
    }

    pub fn choice_list(&self, id: &str) -> Option<ListChoices> {
        self.state.read(|s| s.list_choices.get(id).cloned())
    }

    pub fn require_choice_list(&self, id: &str) -> Result<ListChoices, ScenarioError> {
        self.choice_list(id).ok_or_else(|| missing("choice list", id))
    }

    pub fn set_supplies(&self, id: &str, value: SupplyCounts) -> Result<(), ScenarioError> {
        debug!(
            scenario_id = %self.scenario_id,
            step_id = id,
            investigators = value.len(),
            "Recording supplies"
        );
        self.actions.set_supplies(id, value)
    }

    pub fn has_supplies(&self, id: &str) -> bool {
        self.state.read(|s| s.supply_counts.contains_key(id))
    }

    pub fn supplies(&self, id: &str) -> Option<SupplyCounts> {
        self.state.read(|s| s.supply_counts.get(id).cloned())
    }

    pub fn require_supplies(&self, id: &str) -> Result<SupplyCounts, ScenarioError> {
        self.supplies(id).ok_or_else(|| missing("supplies", id))
    }

    pub fn set_decision(&self, id: &str, value: bool) -> Result<(), ScenarioError> {
        debug!(scenario_id = %self.scenario_id, step_id = id, value, "Recording decision");
        self.actions.set_decision(id, value)
    }

    pub fn has_decision(&self, id: &str) -> bool {
        self.state.read(|s| s.decisions.contains_key(id))
    }

    pub fn decision(&self, id: &str) -> Option<bool> {
        self.state.read(|s| s.decisions.get(id).copied())
    }

    pub fn require_decision(&self, id: &str) -> Result<bool, ScenarioError> {
        self.decision(id).ok_or_else(|| missing("decision", id))
    }

    pub fn set_count(&self, id: &str, value: i64) -> Result<(), ScenarioError> {
        debug!(scenario_id = %self.scenario_id, step_id = id, value, "Recording count");
        self.actions.set_count(id, value)
    }

    pub fn has_count(&self, id: &str) -> bool {
        self.state.read(|s| s.counts.contains_key(id))
    }

    pub fn count(&self, id: &str) -> Option<i64> {
        self.state.read(|s| s.counts.get(id).copied())
    }

    pub fn require_count(&self, id: &str) -> Result<i64, ScenarioError> {
        self.count(id).ok_or_else(|| missing("count", id))
    }
}

fn missing(kind: &str, id: &str) -> ScenarioError {
    ScenarioError::not_found(NotFoundKind::Step, format!("no {kind} recorded for step {id}"))
}
