//! DTOs for account and authentication requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::validation::{rule_error, validate_password, validate_required, validate_required_email};

pub const VERIFICATION_CODE_LENGTH: usize = 6;
pub const INVALID_CODE_MESSAGE: &str = "Code must be exactly 6 digits.";

fn validate_verification_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == VERIFICATION_CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(());
    }
    Err(rule_error("invalid_code", INVALID_CODE_MESSAGE))
}

/// Request to email a password-reset code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequestDto {
    #[validate(custom(function = "validate_required_email"))]
    pub email: String,
}

/// Request to email an address-verification code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerificationCodeRequestDto {
    #[validate(custom(function = "validate_required_email"))]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestDto {
    #[validate(custom(function = "validate_required_email"))]
    pub email: String,

    #[validate(custom(function = "validate_required"))]
    pub password: String,
}

/// Completes a reset started with [`ForgotPasswordRequestDto`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequestDto {
    #[validate(custom(function = "validate_required_email"))]
    pub email: String,

    #[validate(custom(function = "validate_verification_code"))]
    pub code: String,

    #[validate(custom(function = "validate_password"))]
    pub new_password: String,
}

/// Account part of a patient registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDto {
    #[validate(custom(function = "validate_required"))]
    pub full_name: String,

    #[validate(custom(function = "validate_required_email"))]
    pub email: String,

    #[validate(custom(function = "validate_password"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match."))]
    pub confirm_password: String,

    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Patient profile part of a registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatientDto {
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Registration body: both parts are mandatory and validated together.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    #[serde(alias = "registerDTO")]
    #[validate(nested)]
    pub register_dto: RegisterDto,

    #[serde(alias = "patientDTO")]
    #[validate(nested)]
    pub patient_dto: PatientDto,
}

/// Generic acknowledgement for requests processed out of band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedResponse {
    pub message: String,
}
