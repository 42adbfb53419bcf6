//! Token repository backed by configured hashes.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::domain::repositories::TokenRepository;
use crate::error::AppError;

/// Accepts the token hashes listed in `API_TOKEN_HASHES`.
///
/// Hashes are compared in lowercase hex.
#[derive(Debug, Default, Clone)]
pub struct StaticTokenRepository {
    hashes: HashSet<String>,
}

impl StaticTokenRepository {
    pub fn new(hashes: impl IntoIterator<Item = String>) -> Self {
        Self {
            hashes: hashes
                .into_iter()
                .map(|h| h.trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
        }
    }
}

#[async_trait]
impl TokenRepository for StaticTokenRepository {
    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError> {
        Ok(self.hashes.contains(&token_hash.to_ascii_lowercase()))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.hashes.len())
    }
}
