//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod chat;
pub mod health;

pub use auth::{forgot_password_handler, verification_code_handler};
pub use chat::chat_handler;
pub use health::health_handler;
