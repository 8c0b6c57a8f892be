// src/report/session.rs
// =============================================================================
// The main loop: read a line, check it, print it, pause, repeat.
//
// How it works:
// 1. Print the banner
// 2. For every accepted line of input:
//      ask the checker -> print the block -> count it -> sleep
// 3. Stop when input runs out OR the interrupt future fires (Ctrl-C)
// 4. Print the summary either way
//
// Politeness:
// - A fixed pause after every checked URL, the same after failures
//
// Interruption:
// - The loop races the interrupt future with tokio::select!. When Ctrl-C
//   wins, the loop future is simply dropped wherever it was waiting (inside
//   the HTTP request or the sleep). The tally lives outside that future, so
//   the work done so far still shows up in the summary.
// =============================================================================

use anyhow::{Context, Result};
use log::debug;
use std::future::Future;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::format::{write_header, write_interrupted, write_result, write_summary};
use crate::checker::{CheckResult, WaybackChecker};
use crate::input::accept_line;

/// Pause after each checked URL unless overridden
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Running counters for the summary line
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    /// URLs whose check finished and was printed
    pub total: usize,
    /// URLs that came back archived
    pub archived: usize,
}

impl Tally {
    fn record(&mut self, result: &CheckResult) {
        self.total += 1;
        if result.is_available() {
            self.archived += 1;
        }
    }
}

// How the loop ended
enum Completion {
    Exhausted,
    Interrupted,
}

/// One pass over the input with a shared checker
pub struct Session {
    checker: WaybackChecker,
    delay: Duration,
}

impl Session {
    pub fn new(checker: WaybackChecker, delay: Duration) -> Self {
        Self { checker, delay }
    }

    /// Checks every URL in `input`, writing the report to `out`
    ///
    /// Returns the final tally. Being interrupted is not an error: the
    /// notice and summary are printed and the tally so far is returned.
    pub async fn run<R, W, I>(&self, input: R, out: &mut W, interrupt: I) -> Result<Tally>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
        I: Future<Output = ()>,
    {
        write_header(out)?;
        out.flush()?;

        let mut tally = Tally::default();

        // Interrupt goes first so a pending Ctrl-C always wins over more work
        let completion = tokio::select! {
            biased;
            _ = interrupt => Ok(Completion::Interrupted),
            res = self.check_lines(input, out, &mut tally) => res.map(|()| Completion::Exhausted),
        }?;

        if let Completion::Interrupted = completion {
            debug!("interrupted after {} URL(s)", tally.total);
            write_interrupted(out)?;
        }

        write_summary(out, &tally)?;
        out.flush()?;
        Ok(tally)
    }

    async fn check_lines<R, W>(&self, input: R, out: &mut W, tally: &mut Tally) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        while let Some(line) = lines
            .next_line()
            .await
            .context("failed to read standard input")?
        {
            let Some(url) = accept_line(&line) else {
                continue;
            };

            let result = self.checker.check(url).await;

            write_result(out, &result)?;
            out.flush()?;
            tally.record(&result);

            tokio::time::sleep(self.delay).await;
        }

        Ok(())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does tokio::select! do here?
//    - It polls both futures (the interrupt and the loop) and finishes as
//      soon as one of them does
//    - The other one is dropped right there, in the middle of whatever it
//      was awaiting
//    - `biased;` makes it poll in the written order, interrupt first
//
// 2. What happens to a request that's in flight when Ctrl-C arrives?
//    - Dropping the loop future drops the reqwest future inside it, which
//      abandons the request
//    - Nothing was printed or counted for that URL yet, because both happen
//      after check() returns
//
// 3. Why is `tally` declared outside the select!?
//    - The loop only borrows it (&mut Tally)
//    - When the loop future is dropped, the borrow ends and we still own
//      the counts, so the summary can be printed
//
// 4. Why `R: AsyncBufRead + Unpin`?
//    - lines() needs a buffered async reader
//    - In main that's BufReader<Stdin>, and in tests a plain &[u8] works
//      because tokio implements AsyncBufRead for byte slices
// -----------------------------------------------------------------------------
