// src/report/mod.rs
// =============================================================================
// This module turns check results into the console report.
//
// Submodules:
// - session: The read -> check -> print -> sleep loop and its running tally
// - format: How the banner, each result, the summary and the usage text look
// =============================================================================

mod format;
mod session;

pub use format::write_usage;
pub use session::{Session, DEFAULT_DELAY_MS};
