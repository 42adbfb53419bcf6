//! No-op email transport.

use async_trait::async_trait;

use crate::domain::services::{EmailError, EmailService};

/// Email transport that only logs what would have been sent.
///
/// Used when SMTP is not configured so that local and test deployments keep
/// working. The body is never logged because it carries codes and passwords.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEmailService;

impl LogEmailService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailService for LogEmailService {
    fn transport_name(&self) -> &'static str {
        "log"
    }

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        tracing::info!(
            to,
            subject,
            body_len = body.len(),
            "SMTP disabled, email not delivered"
        );
        Ok(())
    }
}
