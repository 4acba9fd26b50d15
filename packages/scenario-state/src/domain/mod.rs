//! Domain layer: the scenario record, the status table and the helper.

pub mod helper;
pub mod state;
pub mod status;

#[cfg(test)]
mod tests_helper;

// Re-exports for ergonomics
pub use helper::{ScenarioStateHelper, StepInputKind};
pub use state::{step_id, ListChoices, ScenarioState, SupplyCounts};
pub use status::{InvestigatorResolutionStatus, INVESTIGATOR_STATUS_ID, ORDERED_INVESTIGATOR_STATUS};
