//! Field-level validation rules shared by the DTOs.
//!
//! Each rule is a pure predicate paired with a fixed error code and message.
//! DTOs attach rules through `#[validate(...)]` attributes; the derived
//! [`validator::Validate`] impl acts as the per-DTO rule registry and
//! `validate()` as the runner that aggregates every failure before any
//! business logic executes.
//!
//! # Rules
//!
//! | Rule                      | Code                    | Function                   |
//! |---------------------------|-------------------------|----------------------------|
//! | Required                  | `required`              | [`validate_required`]      |
//! | Email address             | `invalid_format`        | [`validate_email_address`] |
//! | Password complexity       | `password_complexity`   | [`validate_password`]      |
//! | Image file                | `missing_file`, ...     | [`validate_image_file`]    |

pub mod email;
pub mod image;
pub mod password;

pub use email::{
    is_valid_email, validate_email_address, validate_required, validate_required_email,
};
pub use image::{ImageFileError, ImageFormat, ImagePolicy, UploadedFile, validate_image_file};
pub use password::{PasswordPolicy, PasswordViolation, validate_password};

use std::borrow::Cow;
use validator::ValidationError;

/// Builds a [`ValidationError`] with a fixed code and human-readable message.
pub(crate) fn rule_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}
