#![allow(dead_code)]

// tests/common/mod.rs
use scenario_state::{ListChoices, INVESTIGATOR_STATUS_ID};

// Logging is auto-installed for every test binary that pulls in this module
#[ctor::ctor]
fn init_logging() {
    scenario_test_support::logging::init();
}

/// Build list choices from `(code, values)` pairs.
pub fn list_choices(entries: &[(&str, &[i32])]) -> ListChoices {
    entries
        .iter()
        .map(|(code, values)| (code.to_string(), values.to_vec()))
        .collect()
}

/// Step id used for investigator statuses, re-exported for brevity in tests.
pub const STATUS_ID: &str = INVESTIGATOR_STATUS_ID;
