//! Account notification flows: verification codes, password resets and
//! temporary passwords.

use serde_json::json;
use std::sync::Arc;

use crate::api::dto::{ForgotPasswordRequestDto, VerificationCodeRequestDto};
use crate::domain::services::{EmailError, EmailService};
use crate::error::AppError;
use crate::utils::code_generator::{generate_temporary_password, generate_verification_code};

/// Issues one-time secrets and emails them to the account holder.
///
/// Issued values are returned to the caller, which owns their persistence.
/// They are never logged.
pub struct AccountService {
    email: Arc<dyn EmailService>,
}

impl AccountService {
    pub fn new(email: Arc<dyn EmailService>) -> Self {
        Self { email }
    }

    /// Name of the underlying email transport.
    pub fn transport_name(&self) -> &'static str {
        self.email.transport_name()
    }

    /// Generates a password-reset code and emails it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the email cannot be delivered.
    pub async fn request_password_reset(
        &self,
        request: &ForgotPasswordRequestDto,
    ) -> Result<String, AppError> {
        let to = request.email.trim();
        let code = generate_verification_code();

        self.email
            .send_password_reset_code(to, &code)
            .await
            .map_err(delivery_error)?;

        tracing::info!(to, "Password reset code issued");
        Ok(code)
    }

    /// Generates an email-verification code and emails it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the email cannot be delivered.
    pub async fn request_verification_code(
        &self,
        request: &VerificationCodeRequestDto,
    ) -> Result<String, AppError> {
        let to = request.email.trim();
        let code = generate_verification_code();

        self.email
            .send_verification_code(to, &code)
            .await
            .map_err(delivery_error)?;

        tracing::info!(to, "Verification code issued");
        Ok(code)
    }

    /// Generates a temporary password for a staff-created account and emails it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `to` is not an email address and
    /// [`AppError::Upstream`] if the email cannot be delivered.
    pub async fn issue_temporary_password(&self, to: &str) -> Result<String, AppError> {
        let to = to.trim();
        if !crate::validation::is_valid_email(to) {
            return Err(AppError::invalid_field(
                "email",
                crate::validation::email::INVALID_EMAIL_MESSAGE,
            ));
        }

        let password = generate_temporary_password();

        self.email
            .send_new_user_password(to, &password)
            .await
            .map_err(delivery_error)?;

        tracing::info!(to, "Temporary password issued");
        Ok(password)
    }
}

fn delivery_error(e: EmailError) -> AppError {
    tracing::error!(error = %e, "Email delivery failed");
    AppError::upstream("Email delivery failed", json!({ "reason": e.to_string() }))
}
