//! Capability traits for outbound integrations.
//!
//! Business logic depends on these traits; implementations live in
//! `crate::infrastructure`. Mocks are generated via `mockall` for tests.

pub mod ai_service;
pub mod email_service;

pub use ai_service::{AiChatService, AiError};
pub use email_service::{EmailError, EmailService};

#[cfg(test)]
pub use ai_service::MockAiChatService;
#[cfg(test)]
pub use email_service::MockEmailService;
