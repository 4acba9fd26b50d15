#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;
pub mod ports;
pub mod store;

// Re-exports for public API
pub use domain::{
    step_id, InvestigatorResolutionStatus, ListChoices, ScenarioState, ScenarioStateHelper,
    StepInputKind, SupplyCounts, INVESTIGATOR_STATUS_ID, ORDERED_INVESTIGATOR_STATUS,
};
pub use errors::{InfraErrorKind, NotFoundKind, ScenarioError};
pub use ports::{ScenarioStateActions, ScenarioStateSource};
pub use store::{CampaignScenarioStore, MemoryScenarioStore, ScenarioSlot};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scenario_test_support::logging::init();
}
