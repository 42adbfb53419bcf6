//! AI chat orchestration.

use serde_json::json;
use std::sync::Arc;

use crate::api::dto::{ChatRequestDto, ChatResponseDto};
use crate::domain::entities::ChatRequest;
use crate::domain::services::{AiChatService, AiError};
use crate::error::AppError;

/// Forwards validated chat requests to the configured AI provider.
pub struct ChatService {
    provider: Arc<dyn AiChatService>,
}

impl ChatService {
    pub fn new(provider: Arc<dyn AiChatService>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider()
    }

    /// Generates a response for the conversation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the provider call fails or yields
    /// no content.
    pub async fn generate(&self, dto: ChatRequestDto) -> Result<ChatResponseDto, AppError> {
        let request = ChatRequest::from(dto);

        let response = self
            .provider
            .generate_response(&request)
            .await
            .map_err(|e| self.provider_error(e))?;

        tracing::info!(
            provider = self.provider.provider(),
            history = request.history.len(),
            response_len = response.len(),
            "Chat response generated"
        );

        Ok(ChatResponseDto {
            provider: self.provider.provider().to_string(),
            response,
        })
    }

    fn provider_error(&self, e: AiError) -> AppError {
        let provider = self.provider.provider();
        tracing::error!(provider, error = %e, "AI provider call failed");

        let details = match &e {
            AiError::Api { status, .. } => json!({ "provider": provider, "status": status }),
            _ => json!({ "provider": provider }),
        };
        AppError::upstream(e.to_string(), details)
    }
}
