//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AccountService, AuthService, ChatService};
use crate::infrastructure::auth::StaticTokenRepository;

/// Immutable services shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<StaticTokenRepository>>,
    pub account_service: Arc<AccountService>,
    pub chat_service: Arc<ChatService>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService<StaticTokenRepository>>,
        account_service: Arc<AccountService>,
        chat_service: Arc<ChatService>,
    ) -> Self {
        Self {
            auth_service,
            account_service,
            chat_service,
        }
    }
}
