//! Error handling for the scenario state tracker.

pub mod domain;

pub use domain::{InfraErrorKind, NotFoundKind, ScenarioError};
