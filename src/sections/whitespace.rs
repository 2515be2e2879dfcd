//! Whitespace section - rejects spaces anywhere in the password.

use super::PasswordCandidate;

pub const WHITESPACE_MESSAGE: &str = "Password cannot contain spaces";

/// Checks that the raw password has no leading, trailing or interior
/// whitespace.
///
/// # Returns
/// - `true` if no whitespace is present
/// - `false` otherwise
pub fn whitespace_section(candidate: &PasswordCandidate<'_>) -> bool {
    candidate.raw == candidate.trimmed && !candidate.raw.chars().any(char::is_whitespace)
}
