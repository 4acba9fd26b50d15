//! Command-line guide driver over a persisted scenario record.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod error;

pub use adapters::json_file::JsonFileStore;
pub use commands::{run, Args, Command};
pub use config::CliConfig;
pub use error::CliError;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scenario_test_support::logging::init();
}
