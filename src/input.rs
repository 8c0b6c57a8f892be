// src/input.rs
// =============================================================================
// Decides which lines of standard input are URLs worth checking.
//
// The rule is deliberately small: trim the line, then keep it only if it
// starts with http:// or https://. There is no further validation; odd URLs
// are passed straight to the archive API and it decides what they mean.
// =============================================================================

/// Schemes the checker accepts. Anything else (mailto:, ftp:, bare words) is skipped.
const ACCEPTED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Returns the trimmed URL if `line` should be checked, or `None` to skip it
///
/// Example:
///   "  https://example.com \n" -> Some("https://example.com")
///   "hello"                    -> None
///   ""                         -> None
pub fn accept_line(line: &str) -> Option<&str> {
    let candidate = line.trim();
    if candidate.is_empty() {
        return None;
    }

    ACCEPTED_SCHEMES
        .iter()
        .any(|scheme| candidate.starts_with(scheme))
        .then_some(candidate)
}
