//! Scenario test support utilities
//!
//! Shared by the unit and integration tests of every workspace member:
//! one-time logging initialization plus a capture writer for asserting on
//! emitted log lines.

pub mod logging;
