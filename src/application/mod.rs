//! Application layer services implementing business logic.
//!
//! Services consume the domain's capability and repository traits and provide
//! a narrow API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - API token authentication
//! - [`services::account_service::AccountService`] - Verification codes, password resets and temporary passwords
//! - [`services::chat_service::ChatService`] - AI chat proxy

pub mod services;
