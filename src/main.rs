// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and set up logging
// 2. Refuse to run (print usage) if nobody piped anything into stdin
// 3. Run the check loop over stdin, stopping early on Ctrl-C
// 4. Exit with proper code (0 = done or interrupted, 1 = usage, 2 = error)
//
// Logging goes to stderr through env_logger so it never mixes with the report
// on stdout. Quiet by default; -v or RUST_LOG turns it up.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - Wayback availability lookups
mod cli; // src/cli.rs - command-line parsing
mod input; // src/input.rs - which stdin lines count as URLs
mod report; // src/report/ - the check loop and console output

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use std::future::Future;
use std::io::{self, IsTerminal, Write};
use tokio::io::{AsyncBufRead, BufReader};

use checker::WaybackChecker;
use cli::Cli;
use report::Session;

#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    //
    // Exit from inside the runtime: tokio's stdin read runs on a blocking
    // thread that can't be cancelled, and a normal runtime shutdown after
    // Ctrl-C would hang waiting for it.
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = input finished or the user interrupted
//   Ok(1) = usage error (stdin is a terminal)
//   Err   = unexpected error (reported as exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let is_terminal = std::io::stdin().is_terminal();
    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();

    check_stdin(&cli, is_terminal, input, &mut out, ctrl_c()).await
}

// Everything after argument parsing, with stdin/stdout passed in
//
// The usage gate runs before the checker exists, so a terminal on stdin
// never leads to a request.
async fn check_stdin<R, W, I>(
    cli: &Cli,
    is_terminal: bool,
    input: R,
    out: &mut W,
    interrupt: I,
) -> Result<i32>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    I: Future<Output = ()>,
{
    if let Some(code) = usage_exit(is_terminal, out)? {
        return Ok(code);
    }

    let checker = WaybackChecker::new(&cli.checker_config())?;
    let session = Session::new(checker, cli.delay());
    let tally = session
        .run(input, out, interrupt)
        .await
        .context("failed while checking URLs")?;

    info!(
        "finished: {} checked, {} archived",
        tally.total, tally.archived
    );
    Ok(0)
}

// Nothing piped in (stdin is a terminal): print usage and exit with 1
fn usage_exit<W: Write>(is_terminal: bool, out: &mut W) -> io::Result<Option<i32>> {
    if !is_terminal {
        return Ok(None);
    }
    report::write_usage(out)?;
    Ok(Some(1))
}

fn init_logger(verbose: bool) {
    let default_log_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_log_level)).init();
}

// Resolves on the first Ctrl-C. If the handler can't be installed, it never
// resolves, so the loop just runs to the end of input.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("unable to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
