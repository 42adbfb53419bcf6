//! Business logic services for the application layer.

pub mod account_service;
pub mod auth_service;
pub mod chat_service;

pub use account_service::AccountService;
pub use auth_service::AuthService;
pub use chat_service::ChatService;
