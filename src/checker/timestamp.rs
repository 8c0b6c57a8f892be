// src/checker/timestamp.rs
// Wayback timestamps look like "20200101000000" (YYYYMMDDHHMMSS).

use chrono::NaiveDateTime;

/// Shown when a result has no timestamp at all
pub const MISSING_TIMESTAMP: &str = "N/A";

const WAYBACK_FORMAT: &str = "%Y%m%d%H%M%S";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats a Wayback timestamp as `YYYY-MM-DD HH:MM:SS`
///
/// Never fails: a missing or empty value becomes "N/A", and anything that
/// isn't a valid 14-digit date-time is returned as-is.
pub fn format_timestamp(timestamp: Option<&str>) -> String {
    let raw = match timestamp {
        Some(raw) if !raw.is_empty() => raw,
        _ => return MISSING_TIMESTAMP.to_string(),
    };

    // chrono's %Y happily takes more or fewer than four digits, so pin the width first
    if raw.len() != 14 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    match NaiveDateTime::parse_from_str(raw, WAYBACK_FORMAT) {
        Ok(parsed) => parsed.format(DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
