//! API route configuration.

use crate::api::handlers::{chat_handler, forgot_password_handler, verification_code_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Account endpoints reachable without a token.
///
/// # Endpoints
///
/// - `POST /auth/forgot-password`   - Email a password-reset code
/// - `POST /auth/verification-code` - Email an address-verification code
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/forgot-password", post(forgot_password_handler))
        .route("/auth/verification-code", post(verification_code_handler))
}

/// Routes protected by Bearer token authentication via
/// [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `POST /ai/chat` - Proxy a conversation to the AI provider
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/ai/chat", post(chat_handler))
}
