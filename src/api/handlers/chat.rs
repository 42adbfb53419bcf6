//! Handler for the AI chat endpoint.

use axum::{Json, extract::State};

use crate::api::dto::{ChatRequestDto, ChatResponseDto};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Generates a structured response from the configured AI provider.
///
/// # Endpoint
///
/// `POST /api/ai/chat`
///
/// # Request Body
///
/// ```json
/// {
///   "prompt": "Which specialist treats migraines?",
///   "history": [{ "role": "user", "content": "Hi" }, { "role": "model", "content": "Hello" }],
///   "responseSchema": { "type": "OBJECT", "properties": { "answer": { "type": "STRING" } } },
///   "systemInstruction": "You are a triage assistant."
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "provider": "gemini", "response": "{\"answer\":\"A neurologist.\"}" }
/// ```
///
/// # Errors
///
/// - 400 if validation fails
/// - 401 if the bearer token is missing or invalid
/// - 502 if the provider call fails
pub async fn chat_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ChatRequestDto>,
) -> Result<Json<ChatResponseDto>, AppError> {
    let response = state.chat_service.generate(payload).await?;
    Ok(Json(response))
}
