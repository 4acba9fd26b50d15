use crate::domain::{
    InvestigatorResolutionStatus, ListChoices, ScenarioState, ScenarioStateHelper, StepInputKind,
    SupplyCounts, INVESTIGATOR_STATUS_ID,
};
use crate::errors::domain::{InfraErrorKind, NotFoundKind, ScenarioError};
use crate::ports::ScenarioStateActions;
use crate::store::MemoryScenarioStore;

/// Port whose store is unavailable.
struct FailingActions;

impl ScenarioStateActions for FailingActions {
    fn set_decision(&self, _id: &str, _value: bool) -> Result<(), ScenarioError> {
        Err(unavailable())
    }
    fn set_count(&self, _id: &str, _value: i64) -> Result<(), ScenarioError> {
        Err(unavailable())
    }
    fn set_supplies(&self, _id: &str, _value: SupplyCounts) -> Result<(), ScenarioError> {
        Err(unavailable())
    }
    fn set_choice_list(&self, _id: &str, _value: ListChoices) -> Result<(), ScenarioError> {
        Err(unavailable())
    }
    fn set_choice(&self, _id: &str, _value: i32) -> Result<(), ScenarioError> {
        Err(unavailable())
    }
    fn reset_scenario(&self) -> Result<(), ScenarioError> {
        Err(unavailable())
    }
}

fn unavailable() -> ScenarioError {
    ScenarioError::infra(InfraErrorKind::Persistence, "store offline")
}

fn statuses(entries: &[(&str, &[i32])]) -> ListChoices {
    entries
        .iter()
        .map(|(code, values)| (code.to_string(), values.to_vec()))
        .collect()
}

#[test]
fn unanswered_step_has_no_input() {
    let store = MemoryScenarioStore::new();
    let helper = ScenarioStateHelper::new("tnotz", &store, &store, 2);

    assert!(!helper.has_decision("tnotz_intro"));
    assert!(!helper.has_count("tnotz_intro"));
    assert!(!helper.has_choice("tnotz_intro"));
    assert!(!helper.has_choice_list("tnotz_intro"));
    assert!(!helper.has_supplies("tnotz_intro"));
    assert!(!helper.has_step_input("tnotz_intro"));
    assert!(helper.step_input_kinds("tnotz_intro").is_empty());
    assert_eq!(helper.decision("tnotz_intro"), None);
}

#[test]
fn zero_count_is_an_answer() {
    let store = MemoryScenarioStore::new();
    let helper = ScenarioStateHelper::new("tnotz", &store, &store, 2);

    assert!(!helper.has_count("tnotz_damage"));
    helper.set_count("tnotz_damage", 0).unwrap();
    assert!(helper.has_count("tnotz_damage"));
    assert_eq!(helper.count("tnotz_damage"), Some(0));
    assert!(helper.has_step_input("tnotz_damage"));
}

#[test]
fn false_decision_is_an_answer() {
    let store = MemoryScenarioStore::new();
    let helper = ScenarioStateHelper::new("tnotz", &store, &store, 2);

    helper.set_decision("tnotz_burn_house", false).unwrap();
    assert!(helper.has_decision("tnotz_burn_house"));
    assert_eq!(helper.require_decision("tnotz_burn_house"), Ok(false));
}

#[test]
fn step_input_kinds_lists_every_recorded_kind() {
    let store = MemoryScenarioStore::new();
    let helper = ScenarioStateHelper::new("tnotz", &store, &store, 1);

    helper.set_choice("tnotz_x", 2).unwrap();
    helper.set_supplies("tnotz_x", SupplyCounts::new()).unwrap();

    assert_eq!(
        helper.step_input_kinds("tnotz_x"),
        vec![StepInputKind::Choice, StepInputKind::Supplies]
    );
}

#[test]
fn require_reports_missing_step() {
    let store = MemoryScenarioStore::new();
    let helper = ScenarioStateHelper::new("tnotz", &store, &store, 2);

    let err = helper.require_count("tnotz_clues").unwrap_err();
    assert!(matches!(err, ScenarioError::NotFound(NotFoundKind::Step, ref d) if d.contains("tnotz_clues")));
    assert!(helper.require_choice("tnotz_clues").is_err());
    assert!(helper.require_choice_list("tnotz_clues").is_err());
    assert!(helper.require_supplies("tnotz_clues").is_err());
}

#[test]
fn supplies_round_trip() {
    let store = MemoryScenarioStore::new();
    let helper = ScenarioStateHelper::new("tfa", &store, &store, 2);

    let mut supplies = SupplyCounts::new();
    supplies.insert(
        "01001".into(),
        [("rope".to_string(), 1), ("provisions".to_string(), 3)].into(),
    );
    helper.set_supplies("tfa_supplies", supplies.clone()).unwrap();

    assert_eq!(helper.supplies("tfa_supplies"), Some(supplies));
}

#[test]
fn lead_investigator_is_optional_until_chosen() {
    let store = MemoryScenarioStore::new();
    let helper = ScenarioStateHelper::new("tnotz", &store, &store, 3);

    assert_eq!(helper.lead_investigator_choice(), None);
    helper.set_choice("tnotz_investigator", 2).unwrap();
    assert_eq!(helper.lead_investigator_choice(), Some(2));
    helper.set_choice("tnotz_investigator", 0).unwrap();
    assert_eq!(helper.lead_investigator_choice(), Some(0));
}

#[test]
fn lead_investigator_is_scoped_to_scenario() {
    let store = MemoryScenarioStore::new();
    let helper = ScenarioStateHelper::new("tnotz", &store, &store, 2);

    helper.set_choice("midnight_investigator", 1).unwrap();
    assert_eq!(helper.lead_investigator_choice(), None);
}

#[test]
fn resolution_status_is_empty_without_records() {
    let store = MemoryScenarioStore::new();
    let helper = ScenarioStateHelper::new("tnotz", &store, &store, 2);

    assert!(helper.investigator_resolution_status().unwrap().is_empty());
}

#[test]
fn resolution_status_maps_first_index() {
    let store = MemoryScenarioStore::new();
    let helper = ScenarioStateHelper::new("tnotz", &store, &store, 2);

    helper
        .set_choice_list(
            INVESTIGATOR_STATUS_ID,
            statuses(&[("01001", &[2]), ("01002", &[0, 4])]),
        )
        .unwrap();

    let result = helper.investigator_resolution_status().unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result["01001"], InvestigatorResolutionStatus::Physical);
    assert_eq!(result["01002"], InvestigatorResolutionStatus::Alive);
}

#[test]
fn out_of_range_status_is_data_corruption() {
    let store = MemoryScenarioStore::new();
    let helper = ScenarioStateHelper::new("tnotz", &store, &store, 2);

    helper
        .set_choice_list(INVESTIGATOR_STATUS_ID, statuses(&[("01001", &[0]), ("01002", &[17])]))
        .unwrap();

    let err = helper.investigator_resolution_status().unwrap_err();
    assert!(err.is_data_corruption());
    assert!(err.to_string().contains("01002"));
}

#[test]
fn empty_status_sequence_is_data_corruption() {
    let store = MemoryScenarioStore::new();
    let helper = ScenarioStateHelper::new("tnotz", &store, &store, 2);

    helper
        .set_choice_list(INVESTIGATOR_STATUS_ID, statuses(&[("01001", &[])]))
        .unwrap();

    assert!(helper.investigator_resolution_status().unwrap_err().is_data_corruption());
}

#[test]
fn action_failures_propagate_unchanged() {
    let state = ScenarioState::empty();
    let helper = ScenarioStateHelper::new("tnotz", &state, FailingActions, 2);

    assert_eq!(helper.set_decision("a", true), Err(unavailable()));
    assert_eq!(helper.set_count("a", 1), Err(unavailable()));
    assert_eq!(helper.set_choice("a", 1), Err(unavailable()));
    assert_eq!(helper.set_choice_list("a", ListChoices::new()), Err(unavailable()));
    assert_eq!(helper.set_supplies("a", SupplyCounts::new()), Err(unavailable()));
    assert_eq!(helper.reset_scenario(), Err(unavailable()));
    assert!(!helper.has_step_input("a"));
}

#[test]
fn frozen_snapshot_serves_reads() {
    let mut state = ScenarioState::empty();
    state.decisions.insert("tnotz_intro".into(), true);
    let helper = ScenarioStateHelper::new("tnotz", state, FailingActions, 4);

    assert!(helper.has_step_input("tnotz_intro"));
    assert_eq!(helper.decision("tnotz_intro"), Some(true));
    assert_eq!(helper.player_count(), 4);
    assert_eq!(helper.scenario_id(), "tnotz");
}

#[test]
fn reset_clears_all_answers() {
    let store = MemoryScenarioStore::new();
    let helper = ScenarioStateHelper::new("tnotz", &store, &store, 2);

    helper.set_decision("tnotz_intro", true).unwrap();
    helper.set_count("tnotz_damage", 3).unwrap();
    helper.set_choice("tnotz_investigator", 1).unwrap();
    helper
        .set_choice_list(INVESTIGATOR_STATUS_ID, statuses(&[("01001", &[1])]))
        .unwrap();
    helper.set_supplies("tnotz_supplies", SupplyCounts::new()).unwrap();

    helper.reset_scenario().unwrap();

    for id in [
        "tnotz_intro",
        "tnotz_damage",
        "tnotz_investigator",
        INVESTIGATOR_STATUS_ID,
        "tnotz_supplies",
    ] {
        assert!(!helper.has_step_input(id), "{id} survived reset");
    }
    assert_eq!(helper.lead_investigator_choice(), None);
    assert_eq!(helper.player_count(), 2);
}
