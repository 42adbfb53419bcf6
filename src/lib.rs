//! # Healthcare API
//!
//! Validation and transfer contract layer for a healthcare platform backend,
//! built with Axum.
//!
//! ## Architecture
//!
//! - **Validation** ([`validation`]) - Reusable field rules (required, email, password, image)
//! - **Domain Layer** ([`domain`]) - Conversation and notification types, capability traits
//! - **Application Layer** ([`application`]) - Account, chat and authentication services
//! - **Infrastructure Layer** ([`infrastructure`]) - SMTP, Gemini/Vertex AI clients, token store
//! - **API Layer** ([`api`]) - DTOs, handlers, extractors and middleware
//!
//! ## Features
//!
//! - Declarative DTO validation with aggregated, camelCase field errors
//! - Password reset and email verification codes delivered by email
//! - Structured AI chat through Gemini or Vertex AI
//! - API token authentication and per-IP rate limiting
//!
//! ## Quick Start
//!
//! ```bash
//! export TOKEN_SIGNING_SECRET="change-me"
//! export GEMINI_API_KEY="..."
//! export API_TOKEN_HASHES="$(cargo run --bin admin -- token hash my-token)"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;
pub mod validation;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, FieldErrors};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AccountService, AuthService, ChatService};
    pub use crate::domain::entities::{ChatMessage, ChatRequest, ChatRole, Notification};
    pub use crate::domain::services::{AiChatService, AiError, EmailError, EmailService};
    pub use crate::error::{AppError, FieldErrors};
    pub use crate::state::AppState;
}
