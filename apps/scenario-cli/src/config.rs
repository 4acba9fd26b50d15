//! Runtime configuration merged from arguments and environment.

use std::env;
use std::path::PathBuf;

use crate::error::CliError;

/// Environment variable naming the scenario state file
pub const STATE_FILE_VAR: &str = "SCENARIO_STATE_FILE";
/// Environment variable holding the log filter
pub const LOG_VAR: &str = "SCENARIO_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub state_file: PathBuf,
    pub log_filter: String,
}

impl CliConfig {
    /// Arguments win over the environment; `--verbose` forces `debug`.
    pub fn resolve(state_file: Option<PathBuf>, verbose: bool) -> Result<Self, CliError> {
        let state_file = match state_file {
            Some(path) => path,
            None => env::var(STATE_FILE_VAR).map(PathBuf::from).map_err(|_| {
                CliError::config(format!("no state file given: pass --file or set {STATE_FILE_VAR}"))
            })?,
        };

        let log_filter = if verbose {
            "debug".to_string()
        } else {
            env::var(LOG_VAR).unwrap_or_else(|_| "warn".to_string())
        };

        Ok(Self {
            state_file,
            log_filter,
        })
    }
}
