//! Vertex AI client for Google publisher models.

use async_trait::async_trait;

use super::wire;
use crate::domain::entities::ChatRequest;
use crate::domain::services::{AiChatService, AiError};

pub struct VertexAiClient {
    client: reqwest::Client,
    project: String,
    location: String,
    model: String,
    access_token: String,
}

impl VertexAiClient {
    pub fn new(
        client: reqwest::Client,
        project: impl Into<String>,
        location: impl Into<String>,
        model: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            project: project.into(),
            location: location.into(),
            model: model.into(),
            access_token: access_token.into(),
        }
    }

    /// The `global` location has no regional host prefix.
    fn endpoint(&self) -> String {
        let host = if self.location == "global" {
            "aiplatform.googleapis.com".to_string()
        } else {
            format!("{}-aiplatform.googleapis.com", self.location)
        };

        format!(
            "https://{host}/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            self.project, self.location, self.model
        )
    }
}

#[async_trait]
impl AiChatService for VertexAiClient {
    fn provider(&self) -> &'static str {
        "vertex"
    }

    async fn generate_response(&self, request: &ChatRequest) -> Result<String, AiError> {
        let body = wire::build_request_body(request);
        let builder = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.access_token);

        let text = wire::execute(builder, &body).await?;

        tracing::debug!(
            model = %self.model,
            location = %self.location,
            response_len = text.len(),
            "Vertex AI response received"
        );
        Ok(text)
    }
}
