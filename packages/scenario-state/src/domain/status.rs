//! Ordered investigator resolution statuses.
//!
//! Recorded status choices are indices into [`ORDERED_INVESTIGATOR_STATUS`],
//! so the table is append-only: reordering it would reinterpret saved data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::ScenarioError;

/// Step id under which per-investigator status indices are recorded.
pub const INVESTIGATOR_STATUS_ID: &str = "investigator_status";

/// End-of-scenario classification of one investigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestigatorResolutionStatus {
    /// Still in play when the scenario ended.
    Alive,
    Resigned,
    /// Defeated by damage.
    Physical,
    /// Defeated by horror.
    Mental,
    /// Eliminated by a scenario effect.
    Eliminated,
}

pub const ORDERED_INVESTIGATOR_STATUS: [InvestigatorResolutionStatus; 5] = [
    InvestigatorResolutionStatus::Alive,
    InvestigatorResolutionStatus::Resigned,
    InvestigatorResolutionStatus::Physical,
    InvestigatorResolutionStatus::Mental,
    InvestigatorResolutionStatus::Eliminated,
];

impl InvestigatorResolutionStatus {
    /// Look up a recorded index; `None` if it falls outside the table.
    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| ORDERED_INVESTIGATOR_STATUS.get(i).copied())
    }

    /// Position of this status in the ordered table.
    pub fn index(self) -> i32 {
        match self {
            Self::Alive => 0,
            Self::Resigned => 1,
            Self::Physical => 2,
            Self::Mental => 3,
            Self::Eliminated => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alive => "alive",
            Self::Resigned => "resigned",
            Self::Physical => "physical",
            Self::Mental => "mental",
            Self::Eliminated => "eliminated",
        }
    }

    /// Whether the investigator was defeated (by damage or horror).
    pub fn is_defeated(self) -> bool {
        matches!(self, Self::Physical | Self::Mental)
    }
}

impl fmt::Display for InvestigatorResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestigatorResolutionStatus {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ORDERED_INVESTIGATOR_STATUS
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ScenarioError::validation(format!("unknown resolution status: {s}")))
    }
}
