// src/report/format.rs
// =============================================================================
// Everything the user sees on stdout: the banner, one block per checked URL,
// the summary, and the usage text.
//
// Each function writes to any `impl Write` instead of calling println!, so
// tests can render into a Vec<u8> and look at exactly what was printed.
// =============================================================================

use std::io::{self, Write};

use super::session::Tally;
use crate::checker::{format_timestamp, CheckResult, Outcome, Snapshot};

/// Width of the "=====" rules around the results
const RULE_WIDTH: usize = 60;

/// Reason shown when the API answered but has no snapshot
const NOT_ARCHIVED_REASON: &str = "Not archived";

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🔍 Checking URLs in Wayback Machine...")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Writes the block for one URL, followed by a blank line
///
/// Archived:
///   ✓ ARCHIVED: https://example.com
///     └─ Archive URL: https://web.archive.org/web/...
///     └─ Archived on: 2021-01-01 00:00:00
///     └─ Status: 200
///
/// Anything else:
///   ✗ NOT FOUND: https://missing.example
///     └─ Reason: Not archived
pub fn write_result<W: Write>(out: &mut W, result: &CheckResult) -> io::Result<()> {
    match &result.outcome {
        Outcome::Archived(snapshot) => write_archived(out, &result.url, snapshot)?,
        Outcome::NotArchived | Outcome::Failed { .. } => {
            writeln!(out, "✗ NOT FOUND: {}", result.url)?;
            writeln!(
                out,
                "  └─ Reason: {}",
                result.error().unwrap_or(NOT_ARCHIVED_REASON)
            )?;
        }
    }
    writeln!(out)
}

fn write_archived<W: Write>(out: &mut W, url: &str, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out, "✓ ARCHIVED: {}", url)?;
    writeln!(out, "  └─ Archive URL: {}", snapshot.archived_url)?;
    writeln!(
        out,
        "  └─ Archived on: {}",
        format_timestamp(Some(&snapshot.timestamp))
    )?;
    writeln!(
        out,
        "  └─ Status: {}",
        snapshot.status.as_deref().unwrap_or("Unknown")
    )
}

pub fn write_interrupted<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n\nInterrupted by user")
}

pub fn write_summary<W: Write>(out: &mut W, tally: &Tally) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "📊 Summary: {}/{} URLs found in Wayback Machine",
        tally.archived, tally.total
    )?;

    if tally.archived > 0 {
        writeln!(
            out,
            "\n💡 Tip: You can visit the archived URLs directly in your browser!"
        )?;
    }
    Ok(())
}

/// Printed instead of running when stdin is a terminal with nothing piped in
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Usage: cat urls.txt | wayback-checker")?;
    writeln!(out, "       or: echo 'https://example.com' | wayback-checker")
}
