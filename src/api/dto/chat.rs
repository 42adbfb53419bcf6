//! DTOs for the AI chat proxy.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::domain::entities::{ChatMessage, ChatRequest, ChatRole};
use crate::validation::{rule_error, validate_required};

pub const MAX_HISTORY_MESSAGES: usize = 100;
pub const HISTORY_TOO_LONG_MESSAGE: &str = "History must not exceed 100 messages.";

fn validate_schema_object(schema: &Value) -> Result<(), ValidationError> {
    match schema {
        Value::Object(map) if !map.is_empty() => Ok(()),
        _ => Err(rule_error(
            "invalid_schema",
            "Response schema must be a non-empty JSON object.",
        )),
    }
}

/// The history bound lives in a schema rule so the per-entry errors from
/// `nested` are still reported for an overlong history.
fn validate_history_length(dto: &ChatRequestDto) -> Result<(), ValidationError> {
    if dto.history.len() > MAX_HISTORY_MESSAGES {
        return Err(rule_error("too_many_messages", HISTORY_TOO_LONG_MESSAGE));
    }
    Ok(())
}

/// One prior turn of the conversation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageDto {
    pub role: ChatRole,

    #[validate(custom(function = "validate_required"))]
    pub content: String,
}

/// Request body for `POST /api/ai/chat`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_history_length", skip_on_field_errors = false))]
pub struct ChatRequestDto {
    #[validate(custom(function = "validate_required"))]
    pub prompt: String,

    #[serde(default)]
    #[validate(nested)]
    pub history: Vec<ChatMessageDto>,

    #[validate(custom(function = "validate_schema_object"))]
    pub response_schema: Value,

    #[serde(default)]
    pub system_instruction: Option<String>,
}

impl From<ChatRequestDto> for ChatRequest {
    fn from(dto: ChatRequestDto) -> Self {
        ChatRequest {
            prompt: dto.prompt,
            history: dto
                .history
                .into_iter()
                .map(|m| ChatMessage {
                    role: m.role,
                    content: m.content,
                })
                .collect(),
            response_schema: dto.response_schema,
            system_instruction: dto
                .system_instruction
                .filter(|s| !s.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseDto {
    pub provider: String,
    pub response: String,
}
