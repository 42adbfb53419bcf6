//! Required-field and email-address rules.

use validator::{ValidateEmail, ValidationError};

use super::rule_error;

pub const REQUIRED_CODE: &str = "required";
pub const REQUIRED_MESSAGE: &str = "This field is required.";

pub const INVALID_EMAIL_CODE: &str = "invalid_format";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";

/// Rejects empty and whitespace-only strings.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule_error(REQUIRED_CODE, REQUIRED_MESSAGE));
    }
    Ok(())
}

/// Returns whether `value` has a `local@domain` structure, using the same
/// check as `#[validate(email)]` (254 bytes overall, 64 for the local part).
pub fn is_valid_email(value: &str) -> bool {
    ValidateEmail::validate_email(&value)
}

/// Rejects non-empty strings that are not email addresses.
///
/// Empty values pass: pair with [`validate_required`] when the field is
/// mandatory so that an empty field reports only the required error.
pub fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || is_valid_email(trimmed) {
        return Ok(());
    }
    Err(rule_error(INVALID_EMAIL_CODE, INVALID_EMAIL_MESSAGE))
}

/// Required email: blank values report `required`, malformed ones
/// `invalid_format`.
pub fn validate_required_email(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    validate_email_address(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_empty_and_whitespace() {
        assert_eq!(validate_required("").unwrap_err().code, REQUIRED_CODE);
        assert_eq!(validate_required("   \t").unwrap_err().code, REQUIRED_CODE);
        assert!(validate_required("x").is_ok());
    }

    #[test]
    fn test_accepts_plain_address() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(is_valid_email("admin@localhost"));
    }

    #[test]
    fn test_rejects_missing_domain_structure() {
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_rejects_overlong_address() {
        let local = "a".repeat(250);
        assert!(!is_valid_email(&format!("{local}@example.com")));

        let label = "b".repeat(60);
        let domain = format!("{label}.{label}.{label}.{label}.{label}.com");
        assert!(!is_valid_email(&format!("user@{domain}")));
    }

    #[test]
    fn test_email_rule_leaves_empty_to_required() {
        assert!(validate_email_address("").is_ok());

        let err = validate_email_address("not-an-email").unwrap_err();
        assert_eq!(err.code, INVALID_EMAIL_CODE);
        assert_eq!(err.message.unwrap(), INVALID_EMAIL_MESSAGE);
    }

    #[test]
    fn test_required_email_reports_one_error() {
        assert_eq!(
            validate_required_email("").unwrap_err().code,
            REQUIRED_CODE
        );
        assert_eq!(
            validate_required_email("user").unwrap_err().code,
            INVALID_EMAIL_CODE
        );
        assert!(validate_required_email("user@example.com").is_ok());
    }

    #[test]
    fn test_email_rule_ignores_surrounding_whitespace() {
        assert!(validate_email_address("  user@example.com ").is_ok());
    }
}
