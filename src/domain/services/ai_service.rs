//! Generative AI chat capability.

use async_trait::async_trait;

use crate::domain::entities::ChatRequest;

/// Errors from an AI provider call.
///
/// Provider failures are surfaced as-is; the HTTP boundary reports them as
/// upstream errors.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Provider returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The provider answered without any candidate text.
    #[error("Provider returned no content{}", .reason.as_ref().map(|r| format!(" ({r})")).unwrap_or_default())]
    EmptyResponse { reason: Option<String> },
}

/// Produces a single response for a conversation.
///
/// Gemini and Vertex AI fulfil the same contract; which one serves requests
/// is a deployment choice.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AiChatService: Send + Sync {
    /// Provider name reported in responses and logs.
    fn provider(&self) -> &'static str;

    async fn generate_response(&self, request: &ChatRequest) -> Result<String, AiError>;
}
