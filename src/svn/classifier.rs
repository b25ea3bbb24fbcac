//! Error extraction from failed svn invocations
//!
//! svn has no structured error channel: warnings, progress and the final
//! error all land in the same stream. The rule here is a heuristic. If the
//! output contains `svn: E`, everything from the first occurrence on is the
//! message, otherwise the whole output is.

use std::sync::LazyLock;

use regex::Regex;

use super::SvnError;
use super::constants::errors;

/// Matches the numbered error code right after the marker, e.g. `svn: E170000`
static ERROR_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^svn: (E\d{6})").expect("Invalid svn error code regex"));

/// Extract the human-readable error message from combined output
pub fn error_message(output: &[u8]) -> String {
    let text = String::from_utf8_lossy(output);
    match text.find(errors::MARKER) {
        Some(idx) => text[idx..].trim().to_string(),
        None => text.trim().to_string(),
    }
}

/// Extract the svn error code (`E` plus six digits) from a classified message
pub fn error_code(message: &str) -> Option<String> {
    ERROR_CODE_REGEX
        .captures(message)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Build the error for a non-zero exit
pub fn classify_failure(output: &[u8]) -> SvnError {
    let message = error_message(output);
    let code = error_code(&message);
    SvnError::Execution { message, code }
}
