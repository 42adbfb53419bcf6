//! `generateContent` request and response bodies.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::entities::ChatRequest;
use crate::domain::services::AiError;

/// Builds the request body, asking for a JSON answer shaped by the schema.
pub(super) fn build_request_body(request: &ChatRequest) -> Value {
    let contents: Vec<Value> = request
        .turns()
        .map(|(role, text)| {
            json!({
                "role": role.as_str(),
                "parts": [{ "text": text }],
            })
        })
        .collect();

    let mut body = json!({
        "contents": contents,
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": request.response_schema,
        },
    });

    if let Some(instruction) = &request.system_instruction {
        body["systemInstruction"] = json!({ "parts": [{ "text": instruction }] });
    }

    body
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    pub(super) fn into_text(self) -> Result<String, AiError> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);

        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(AiError::EmptyResponse {
                reason: block_reason,
            });
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AiError::EmptyResponse {
                reason: candidate.finish_reason.or(block_reason),
            });
        }

        Ok(text)
    }
}

/// Sends the request and extracts the answer text.
///
/// Non-2xx responses become [`AiError::Api`] carrying the raw body.
pub(super) async fn execute(
    builder: reqwest::RequestBuilder,
    body: &Value,
) -> Result<String, AiError> {
    let response = builder.json(body).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(AiError::Api {
            status: status.as_u16(),
            body,
        });
    }

    response.json::<GenerateContentResponse>().await?.into_text()
}
