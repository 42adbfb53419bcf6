//! Authentication service for API token validation.

use std::sync::Arc;

use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use crate::utils::token::hash_token;

/// Service for authenticating API requests via Bearer tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// comparison. The configured hash list alone cannot be used to forge tokens
/// without the server-side secret.
pub struct AuthService<R: TokenRepository> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: TokenRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - token store
    /// - `signing_secret` - HMAC key; must match the value used when tokens were created
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Authenticates a raw token against stored credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token hash does not match any
    /// stored credentials.
    pub async fn authenticate(&self, token: &str) -> Result<(), AppError> {
        let token_hash = hash_token(&self.signing_secret, token);

        let is_valid = self.repository.validate_token(&token_hash).await?;

        if !is_valid {
            return Err(AppError::unauthorized("Invalid or revoked token"));
        }

        Ok(())
    }

    /// Number of tokens that can currently authenticate.
    pub async fn token_count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}
