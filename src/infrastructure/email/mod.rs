//! Email transports.
//!
//! - [`SmtpEmailService`] - delivers through an SMTP relay using `lettre`
//! - [`LogEmailService`] - logs the envelope instead of sending; used when
//!   `SMTP_HOST` is not configured

pub mod log_mailer;
pub mod smtp;

pub use log_mailer::LogEmailService;
pub use smtp::SmtpEmailService;
