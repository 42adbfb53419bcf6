//! Password complexity rule.
//!
//! A password is accepted when it is at least [`MIN_PASSWORD_LENGTH`]
//! characters long and contains a lowercase letter, an uppercase letter, a
//! digit and a special (non-word) character. Every failure reports the same
//! message naming all requirements.

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

use super::rule_error;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 128;

pub const PASSWORD_COMPLEXITY_CODE: &str = "password_complexity";
pub const PASSWORD_COMPLEXITY_MESSAGE: &str = "Password must be at least 6 characters long and contain at least one uppercase letter, one lowercase letter, one digit, and one special character.";

pub const PASSWORD_TOO_LONG_CODE: &str = "password_too_long";

static LOWERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]").expect("valid pattern"));
static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]").expect("valid pattern"));
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("valid pattern"));
static SPECIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W").expect("valid pattern"));

/// Why a candidate password was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordViolation {
    /// Too short or missing at least one character class.
    Complexity,
    /// Longer than the policy's upper bound.
    TooLong { max: usize },
}

impl PasswordViolation {
    pub fn code(&self) -> &'static str {
        match self {
            PasswordViolation::Complexity => PASSWORD_COMPLEXITY_CODE,
            PasswordViolation::TooLong { .. } => PASSWORD_TOO_LONG_CODE,
        }
    }

    pub fn message(&self) -> String {
        match self {
            PasswordViolation::Complexity => PASSWORD_COMPLEXITY_MESSAGE.to_string(),
            PasswordViolation::TooLong { max } => {
                format!("Password must be at most {max} characters long.")
            }
        }
    }
}

/// Length bounds applied together with the character-class check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    /// `None` disables the upper bound.
    pub max_length: Option<usize>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: Some(DEFAULT_MAX_PASSWORD_LENGTH),
        }
    }
}

impl PasswordPolicy {
    /// Policy without an upper length bound.
    pub fn unbounded() -> Self {
        Self {
            max_length: None,
            ..Self::default()
        }
    }

    /// Checks `candidate` against the policy.
    ///
    /// The upper bound is tested first so that oversized input is rejected
    /// before any pattern matching runs over it.
    pub fn check(&self, candidate: &str) -> Result<(), PasswordViolation> {
        if let Some(max) = self.max_length
            && candidate.len() > max.saturating_mul(4)
        {
            return Err(PasswordViolation::TooLong { max });
        }

        let length = candidate.chars().count();
        if let Some(max) = self.max_length
            && length > max
        {
            return Err(PasswordViolation::TooLong { max });
        }

        let complex = length >= self.min_length
            && LOWERCASE.is_match(candidate)
            && UPPERCASE.is_match(candidate)
            && DIGIT.is_match(candidate)
            && SPECIAL.is_match(candidate);

        if complex {
            Ok(())
        } else {
            Err(PasswordViolation::Complexity)
        }
    }

    pub fn is_valid(&self, candidate: &str) -> bool {
        self.check(candidate).is_ok()
    }
}

/// Password rule for `#[validate(custom(...))]`, using the default policy.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    PasswordPolicy::default()
        .check(value)
        .map_err(|violation| rule_error(violation.code(), violation.message()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_all_classes_at_minimum_length() {
        assert!(PasswordPolicy::default().is_valid("Abc12!"));
        assert!(PasswordPolicy::default().is_valid("Str0ng#Passw0rd"));
    }

    #[test]
    fn test_rejects_missing_uppercase_and_special() {
        assert_eq!(
            PasswordPolicy::default().check("abc123"),
            Err(PasswordViolation::Complexity)
        );
    }

    #[test]
    fn test_rejects_each_missing_class() {
        let policy = PasswordPolicy::default();
        assert!(!policy.is_valid("ABCDEF1!"), "no lowercase");
        assert!(!policy.is_valid("abcdef1!"), "no uppercase");
        assert!(!policy.is_valid("Abcdef!!"), "no digit");
        assert!(!policy.is_valid("Abcdef12"), "no special");
    }

    #[test]
    fn test_underscore_is_not_special() {
        assert!(!PasswordPolicy::default().is_valid("Abc12_"));
    }

    #[test]
    fn test_rejects_short_password() {
        assert!(!PasswordPolicy::default().is_valid("Ab1!"));
        assert!(!PasswordPolicy::default().is_valid(""));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 5 chars, 7 bytes
        assert!(!PasswordPolicy::default().is_valid("Ab1!é"));
        assert!(PasswordPolicy::default().is_valid("Ab1!éé"));
    }

    #[test]
    fn test_upper_bound_enforced_by_default() {
        let long = format!("Aa1!{}", "x".repeat(DEFAULT_MAX_PASSWORD_LENGTH));
        assert_eq!(
            PasswordPolicy::default().check(&long),
            Err(PasswordViolation::TooLong {
                max: DEFAULT_MAX_PASSWORD_LENGTH
            })
        );
        assert!(PasswordPolicy::unbounded().is_valid(&long));
    }

    #[test]
    fn test_oversized_multibyte_input_rejected_as_too_long() {
        let huge = "é".repeat(DEFAULT_MAX_PASSWORD_LENGTH * 4);
        assert!(matches!(
            PasswordPolicy::default().check(&huge),
            Err(PasswordViolation::TooLong { .. })
        ));
    }

    #[test]
    fn test_max_length_at_usize_max() {
        let policy = PasswordPolicy {
            max_length: Some(usize::MAX),
            ..PasswordPolicy::default()
        };
        assert!(policy.is_valid("Abc12!"));
        assert!(!policy.is_valid("abc123"));
    }

    #[test]
    fn test_validator_adapter_uses_fixed_message() {
        let err = validate_password("abc123").unwrap_err();
        assert_eq!(err.code, PASSWORD_COMPLEXITY_CODE);
        assert_eq!(err.message.unwrap(), PASSWORD_COMPLEXITY_MESSAGE);

        assert!(validate_password("Abc12!").is_ok());
    }
}
