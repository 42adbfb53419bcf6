//! Email notification capability.

use async_trait::async_trait;

use crate::domain::entities::Notification;

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Sends transactional email.
///
/// Implementors provide [`send_email`](EmailService::send_email); the
/// notification methods render a [`Notification`] and delegate to it. Every
/// method reports the same result type so callers handle delivery failure
/// uniformly.
///
/// # Implementations
///
/// - [`crate::infrastructure::email::SmtpEmailService`] - SMTP via `lettre`
/// - [`crate::infrastructure::email::LogEmailService`] - logs instead of sending
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Human-readable transport name for health reporting.
    fn transport_name(&self) -> &'static str;

    /// Sends a plain-text email.
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError>;

    async fn send_notification(
        &self,
        to: &str,
        notification: &Notification,
    ) -> Result<(), EmailError> {
        tracing::debug!(to, kind = notification.kind(), "Sending notification");
        self.send_email(to, notification.subject(), &notification.body())
            .await
    }

    /// Sends an email-address verification code.
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), EmailError> {
        self.send_notification(
            to,
            &Notification::VerificationCode {
                code: code.to_string(),
            },
        )
        .await
    }

    /// Sends a password-reset code.
    async fn send_password_reset_code(&self, to: &str, code: &str) -> Result<(), EmailError> {
        self.send_notification(
            to,
            &Notification::PasswordResetCode {
                code: code.to_string(),
            },
        )
        .await
    }

    /// Sends the initial password of a staff-created account.
    async fn send_new_user_password(&self, to: &str, password: &str) -> Result<(), EmailError> {
        self.send_notification(
            to,
            &Notification::NewUserPassword {
                password: password.to_string(),
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<(String, String, String)>>,
    }

    #[async_trait]
    impl EmailService for Recorder {
        fn transport_name(&self) -> &'static str {
            "recorder"
        }

        async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string(), body.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_reset_code_is_rendered_and_sent() {
        let recorder = Recorder::default();

        recorder
            .send_password_reset_code("user@example.com", "654321")
            .await
            .unwrap();

        let sent = recorder.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "user@example.com");
        assert_eq!(sent[0].1, "Your password reset code");
        assert!(sent[0].2.contains("654321"));
    }

    #[tokio::test]
    async fn test_new_user_password_is_rendered_and_sent() {
        let recorder = Recorder::default();

        recorder
            .send_new_user_password("staff@example.com", "Tmp#Pass1")
            .await
            .unwrap();

        let sent = recorder.sent.lock().unwrap();
        assert!(sent[0].2.contains("Tmp#Pass1"));
    }

    #[test]
    fn test_error_display() {
        let err = EmailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");

        let addr: Result<lettre::Address, _> = "not-an-email".parse();
        let err = EmailError::Address(addr.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}
