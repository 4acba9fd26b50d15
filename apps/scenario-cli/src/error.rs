use scenario_state::ScenarioError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
