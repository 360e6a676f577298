//! Length section - checks password minimum length.

use super::CriterionOutcome;

const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// Length is the native byte length of the string, with no grapheme
/// normalization.
///
/// # Returns
/// - `Some(reason)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(pwd: &str) -> CriterionOutcome {
    if pwd.len() < MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    None
}
