//! Repository trait for API token authentication.

use crate::error::AppError;
use async_trait::async_trait;

/// Lookup of API token hashes.
///
/// Tokens are never stored in clear; callers pass the HMAC-SHA256 hash
/// produced by [`crate::utils::token::hash_token`].
///
/// # Implementations
///
/// - [`crate::infrastructure::auth::StaticTokenRepository`] - hashes loaded from configuration
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Validates a token hash against stored credentials.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the hash belongs to an active token
    /// - `Ok(false)` otherwise
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Number of active tokens.
    async fn count(&self) -> Result<usize, AppError>;
}
