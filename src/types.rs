//! Boundary and result types for password evaluation.

use std::fmt;

use secrecy::SecretString;

/// A candidate value arriving from the signup form boundary.
///
/// The form layer is dynamically typed, so anything can show up where a
/// password is expected. Text candidates are wrapped in [`SecretString`] so
/// they stay out of debug output; everything else collapses into
/// [`PasswordInput::Other`] and evaluates as weak.
#[derive(Clone, Debug)]
pub enum PasswordInput {
    /// A text candidate.
    Text(SecretString),
    /// A non-text value (number, boolean, null, array, object).
    Other,
}

impl From<SecretString> for PasswordInput {
    fn from(secret: SecretString) -> Self {
        PasswordInput::Text(secret)
    }
}

impl From<String> for PasswordInput {
    fn from(s: String) -> Self {
        PasswordInput::Text(SecretString::new(s.into()))
    }
}

impl From<&str> for PasswordInput {
    fn from(s: &str) -> Self {
        PasswordInput::Text(SecretString::new(s.to_string().into()))
    }
}

/// Password strength label, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// The label as shown to the user.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
            PasswordStrength::VeryStrong => "very strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating a password against the five criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    /// How many of the five criteria the password satisfied (0-5).
    pub criteria_met: usize,
    /// User-facing reasons for every criterion the password missed.
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    /// Evaluation for input rejected before any criterion ran.
    pub(crate) fn rejected(reason: &str) -> Self {
        PasswordEvaluation {
            criteria_met: 0,
            reasons: vec![reason.to_string()],
        }
    }

    /// Maps the criteria count to a strength label.
    ///
    /// 0-1 criteria is weak, 2-3 medium, 4 strong, all 5 very strong.
    pub fn strength(&self) -> PasswordStrength {
        match self.criteria_met {
            0 | 1 => PasswordStrength::Weak,
            2 | 3 => PasswordStrength::Medium,
            4 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_labels_are_exact() {
        assert_eq!(PasswordStrength::Weak.as_str(), "weak");
        assert_eq!(PasswordStrength::Medium.as_str(), "medium");
        assert_eq!(PasswordStrength::Strong.as_str(), "strong");
        assert_eq!(PasswordStrength::VeryStrong.as_str(), "very strong");
    }

    #[test]
    fn test_strength_display_matches_as_str() {
        assert_eq!(PasswordStrength::VeryStrong.to_string(), "very strong");
        assert_eq!(PasswordStrength::Weak.to_string(), "weak");
    }

    #[test]
    fn test_strength_ordering() {
        assert!(PasswordStrength::Weak < PasswordStrength::Medium);
        assert!(PasswordStrength::Medium < PasswordStrength::Strong);
        assert!(PasswordStrength::Strong < PasswordStrength::VeryStrong);
    }

    #[test]
    fn test_criteria_count_to_strength_mapping() {
        let strength = |criteria_met| {
            PasswordEvaluation {
                criteria_met,
                reasons: Vec::new(),
            }
            .strength()
        };

        assert_eq!(strength(0), PasswordStrength::Weak);
        assert_eq!(strength(1), PasswordStrength::Weak);
        assert_eq!(strength(2), PasswordStrength::Medium);
        assert_eq!(strength(3), PasswordStrength::Medium);
        assert_eq!(strength(4), PasswordStrength::Strong);
        assert_eq!(strength(5), PasswordStrength::VeryStrong);
    }

    #[test]
    fn test_input_conversions_produce_text() {
        assert!(matches!(PasswordInput::from("abc"), PasswordInput::Text(_)));
        assert!(matches!(
            PasswordInput::from("abc".to_string()),
            PasswordInput::Text(_)
        ));

        let secret = SecretString::new("abc".to_string().into());
        assert!(matches!(
            PasswordInput::from(secret),
            PasswordInput::Text(_)
        ));
    }
}
