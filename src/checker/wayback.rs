// src/checker/wayback.rs
// =============================================================================
// This module asks the Wayback Machine whether a URL has been archived.
//
// Key functionality:
// - One GET per URL against the "available" API:
//     GET https://archive.org/wayback/available?url=<URL>
// - A single reqwest Client, built once with a timeout and User-Agent, reused
//   for every request (connection pooling)
// - Normalizes whatever comes back into a CheckResult
//
// Error handling:
// - check() never returns an error. Non-200 responses, network failures,
//   timeouts and undecodable bodies all become a "failed" CheckResult whose
//   reason is shown to the user. This is the only place failures are
//   recovered; everything above it can assume a result always comes back.
// =============================================================================

use anyhow::{Context, Result};
use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// The public availability endpoint
pub const DEFAULT_ENDPOINT: &str = "https://archive.org/wayback/available";

/// Per-request timeout used unless overridden
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Browser-like User-Agent sent with every request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Settings for building a WaybackChecker
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Availability endpoint; the URL being checked is appended as `?url=`
    pub endpoint: String,
    /// Upper bound on each request, connect through body
    pub timeout: Duration,
    /// Sent as the User-Agent header on every request
    pub user_agent: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// An archived capture of a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Link to the capture, e.g. https://web.archive.org/web/20200101000000/https://example.com
    pub archived_url: String,
    /// When it was captured, as 14 digits (YYYYMMDDHHMMSS)
    pub timestamp: String,
    /// The HTTP status the page returned when it was captured
    pub status: Option<String>,
}

/// What we learned about one URL
///
/// Only `Archived` carries a link and a timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The API returned a usable closest snapshot
    Archived(Snapshot),
    /// The API answered, and there is nothing archived
    NotArchived,
    /// We couldn't get an answer (network error, non-200, bad body)
    Failed { reason: String },
}

/// The result of checking a single URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// The URL that was checked, exactly as it was read (trimmed)
    pub url: String,
    pub outcome: Outcome,
}

impl CheckResult {
    pub fn is_available(&self) -> bool {
        matches!(self.outcome, Outcome::Archived(_))
    }

    /// Set only when the check itself failed, never for "checked, not archived"
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Failed { reason } => Some(reason.as_str()),
            _ => None,
        }
    }
}

// Ways a single lookup can fail. The Display text is what the user sees as
// the "Reason:" line, so keep it short.
#[derive(Debug, Error)]
enum CheckError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("invalid response from availability API: {0}")]
    Decode(#[from] serde_json::Error),
}

// -----------------------------------------------------------------------------
// The shape of the API's JSON response. Everything is optional on the wire:
//
//   {"url": "...", "archived_snapshots": {}}
//   {"url": "...", "archived_snapshots": {"closest": {"available": true,
//       "url": "...", "timestamp": "20200101000000", "status": "200"}}}
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    archived_snapshots: Option<ArchivedSnapshots>,
}

#[derive(Debug, Deserialize)]
struct ArchivedSnapshots {
    closest: Option<Closest>,
}

// `available` and `status` are kept loose: the flag is read for truthiness
// and the status is shown as-is, whether it arrives as "200" or 200.
#[derive(Debug, Deserialize)]
struct Closest {
    available: Option<Value>,
    url: Option<String>,
    timestamp: Option<String>,
    status: Option<Value>,
}

impl AvailabilityResponse {
    // A closest snapshot only counts if it says it's available and has both a
    // link and a timestamp to show.
    fn into_snapshot(self) -> Option<Snapshot> {
        let closest = self.archived_snapshots?.closest?;
        if !closest.available.as_ref().is_some_and(is_truthy) {
            return None;
        }
        Some(Snapshot {
            archived_url: closest.url?,
            timestamp: closest.timestamp?,
            status: closest.status.and_then(status_text),
        })
    }
}

// null, false, 0, "" and empty arrays/objects are all "no"
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn status_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Client for the availability API
///
/// Create one and reuse it for every URL so the underlying connection is kept.
#[derive(Debug, Clone)]
pub struct WaybackChecker {
    client: Client,
    endpoint: Url,
}

impl WaybackChecker {
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .with_context(|| format!("invalid availability endpoint '{}'", config.endpoint))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }

    /// Checks one URL. Always returns a result; failures end up in `Outcome::Failed`.
    pub async fn check(&self, url: &str) -> CheckResult {
        let outcome = match self.lookup(url).await {
            Ok(Some(snapshot)) => Outcome::Archived(snapshot),
            Ok(None) => Outcome::NotArchived,
            Err(e) => {
                info!("lookup failed for {}: {}", url, e);
                Outcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        CheckResult {
            url: url.to_string(),
            outcome,
        }
    }

    async fn lookup(&self, url: &str) -> Result<Option<Snapshot>, CheckError> {
        let request_url = self.request_url(url);
        debug!("GET {}", request_url);

        let response = self.client.get(request_url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(CheckError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: AvailabilityResponse = serde_json::from_str(&body).map_err(|e| {
            debug!("undecodable availability response: {}", body);
            CheckError::from(e)
        })?;

        Ok(parsed.into_snapshot())
    }

    // The URL being checked goes in the query string, percent-encoded
    fn request_url(&self, url: &str) -> Url {
        let mut request_url = self.endpoint.clone();
        request_url.query_pairs_mut().append_pair("url", url);
        request_url
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does check() return CheckResult and not Result<CheckResult>?
//    - A failed lookup is an ordinary answer here ("couldn't check it")
//    - The caller prints it like any other result and moves on
//    - lookup() uses Result + ? internally, and check() is where that Result
//      gets turned into data
//
// 2. What does #[from] do in the CheckError enum?
//    - thiserror generates `impl From<reqwest::Error> for CheckError`
//    - That's what lets `?` convert a reqwest error automatically
//
// 3. Why Option<String> everywhere in the response structs?
//    - The API leaves fields out instead of sending null
//    - serde treats a missing Option field as None
//    - The `?` on Option in into_snapshot() bails out with None on the first
//      missing piece
// -----------------------------------------------------------------------------
