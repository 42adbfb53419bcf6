#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use healthcare_api::application::services::{AccountService, AuthService, ChatService};
use healthcare_api::domain::entities::ChatRequest;
use healthcare_api::domain::services::{AiChatService, AiError, EmailError, EmailService};
use healthcare_api::infrastructure::auth::StaticTokenRepository;
use healthcare_api::state::AppState;
use healthcare_api::utils::token::hash_token;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_TOKEN: &str = "test-api-token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mailer that records every message; optionally fails every send.
#[derive(Default)]
pub struct RecordingEmailService {
    pub sent: Mutex<Vec<SentEmail>>,
    pub fail: bool,
}

impl RecordingEmailService {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailService for RecordingEmailService {
    fn transport_name(&self) -> &'static str {
        "recording"
    }

    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        if self.fail {
            return Err(EmailError::Build("relay refused message".to_string()));
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// AI provider returning a fixed answer and keeping the last request.
pub struct StubAiService {
    pub answer: Result<String, (u16, String)>,
    pub last_request: Mutex<Option<ChatRequest>>,
}

impl StubAiService {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Ok(answer.to_string()),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            answer: Err((status, body.to_string())),
            last_request: Mutex::new(None),
        }
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiChatService for StubAiService {
    fn provider(&self) -> &'static str {
        "stub"
    }

    async fn generate_response(&self, request: &ChatRequest) -> Result<String, AiError> {
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.answer {
            Ok(text) => Ok(text.clone()),
            Err((status, body)) => Err(AiError::Api {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

pub fn create_test_state(
    email: Arc<RecordingEmailService>,
    ai: Arc<StubAiService>,
) -> AppState {
    let token_repo = Arc::new(StaticTokenRepository::new(vec![hash_token(
        TEST_SECRET,
        TEST_TOKEN,
    )]));

    let auth_service = Arc::new(AuthService::new(token_repo, TEST_SECRET.to_string()));
    let account_service = Arc::new(AccountService::new(email));
    let chat_service = Arc::new(ChatService::new(ai));

    AppState::new(auth_service, account_service, chat_service)
}

pub fn default_state() -> AppState {
    create_test_state(
        Arc::new(RecordingEmailService::default()),
        Arc::new(StubAiService::answering("{}")),
    )
}
