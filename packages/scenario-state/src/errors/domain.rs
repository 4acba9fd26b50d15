//! Domain-level error type shared by the helper, the ports and the stores.
//!
//! The helper never creates errors for recorded values it merely stores;
//! errors come from the store behind the mutation port, from `require_*`
//! reads of unanswered steps, or from corrupt resolution-status data.

use thiserror::Error;

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// Persisted data no longer matches the tables used to interpret it.
    DataCorruption,
    /// The store behind the mutation port failed to apply or save a change.
    Persistence,
    Other(String),
}

/// Things that can be missing from a scenario record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    /// No input of the requested kind was recorded for a step.
    Step,
    Scenario,
    Other(String),
}

/// Central error type for scenario state tracking
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    /// Input validation or business rule violation
    #[error("validation error: {0}")]
    Validation(String),
    /// Missing record in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
}

impl ScenarioError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// True when the error signals persisted data that cannot be interpreted.
    pub fn is_data_corruption(&self) -> bool {
        matches!(self, Self::Infra(InfraErrorKind::DataCorruption, _))
    }
}
