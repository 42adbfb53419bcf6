//! Conversation model shared by the AI chat providers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            content: content.into(),
        }
    }
}

/// A single generation request.
///
/// `history` is ordered oldest first; `prompt` is appended after it as the
/// latest user turn. `response_schema` describes the JSON shape the provider
/// must answer with.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub prompt: String,
    pub history: Vec<ChatMessage>,
    pub response_schema: Value,
    pub system_instruction: Option<String>,
}

impl ChatRequest {
    pub fn new(prompt: impl Into<String>, response_schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            history: Vec::new(),
            response_schema,
            system_instruction: None,
        }
    }

    /// History followed by the prompt as the final user turn.
    pub fn turns(&self) -> impl Iterator<Item = (ChatRole, &str)> {
        self.history
            .iter()
            .map(|m| (m.role, m.content.as_str()))
            .chain(std::iter::once((ChatRole::User, self.prompt.as_str())))
    }
}
