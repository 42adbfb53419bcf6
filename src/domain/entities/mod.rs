//! Core domain types shared by services and providers.
//!
//! - [`ChatRequest`] / [`ChatMessage`] - A conversation sent to an AI provider
//! - [`Notification`] - Transactional email content

pub mod chat;
pub mod notification;

pub use chat::{ChatMessage, ChatRequest, ChatRole};
pub use notification::Notification;
