// src/checker/mod.rs
// =============================================================================
// This module contains all Wayback Machine lookup logic.
//
// Submodules:
// - wayback: Asks the availability API about one URL and normalizes the answer
// - timestamp: Turns the API's 14-digit timestamps into readable dates
//
// This file (mod.rs) is the module root - it re-exports the public API so the
// rest of the app can write `checker::WaybackChecker` instead of
// `checker::wayback::WaybackChecker`.
// =============================================================================

mod timestamp;
mod wayback;

pub use timestamp::format_timestamp;
pub use wayback::{
    CheckResult, CheckerConfig, Outcome, Snapshot, WaybackChecker, DEFAULT_ENDPOINT,
    DEFAULT_TIMEOUT_SECS,
};
