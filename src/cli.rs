// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The tool is driven entirely by standard input:
//
//   cat urls.txt | wayback-checker
//
// so every flag here is optional. The defaults reproduce the plain invocation
// exactly; the flags only exist to tune the request policy (delay, timeout)
// and to point the checker at a different endpoint.
// =============================================================================

use clap::Parser;
use std::time::Duration;

use crate::checker::{CheckerConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use crate::report::DEFAULT_DELAY_MS;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "wayback-checker",
    version,
    about = "Check whether URLs piped on stdin are archived in the Wayback Machine",
    long_about = "wayback-checker reads URLs (one per line) from standard input and asks the \
                  Wayback Machine availability API whether each one has an archived snapshot. \
                  Lines that don't start with http:// or https:// are ignored."
)]
pub struct Cli {
    /// Pause between checked URLs, in milliseconds
    ///
    /// A fixed politeness delay toward the API. It never changes based on
    /// earlier failures.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Availability endpoint to query
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT, hide = true)]
    pub endpoint: String,

    /// Show debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the checker settings from the parsed flags
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig {
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..CheckerConfig::default()
        }
    }

    /// The pause taken after every checked URL
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
