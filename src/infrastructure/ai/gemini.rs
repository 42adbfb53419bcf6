//! Google Generative Language API client.

use async_trait::async_trait;

use super::wire;
use crate::domain::entities::ChatRequest;
use crate::domain::services::{AiChatService, AiError};

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// * `base_url` - e.g. `https://generativelanguage.googleapis.com`
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl AiChatService for GeminiClient {
    fn provider(&self) -> &'static str {
        "gemini"
    }

    async fn generate_response(&self, request: &ChatRequest) -> Result<String, AiError> {
        let body = wire::build_request_body(request);
        let builder = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key);

        let text = wire::execute(builder, &body).await?;

        tracing::debug!(
            model = %self.model,
            turns = request.history.len() + 1,
            response_len = text.len(),
            "Gemini response received"
        );
        Ok(text)
    }
}
