mod common;

use axum::{Router, middleware, routing::post};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

use common::{RecordingEmailService, StubAiService, TEST_TOKEN};
use healthcare_api::api::handlers::chat_handler;
use healthcare_api::api::middleware::auth;
use healthcare_api::domain::entities::ChatRole;

fn server(ai: Arc<StubAiService>) -> TestServer {
    let state = common::create_test_state(Arc::new(RecordingEmailService::default()), ai);
    let app = Router::new()
        .route("/api/ai/chat", post(chat_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state);

    TestServer::new(app).unwrap()
}

fn chat_body() -> serde_json::Value {
    json!({
        "prompt": "Which specialist treats migraines?",
        "history": [
            { "role": "user", "content": "Hi" },
            { "role": "model", "content": "Hello, how can I help?" }
        ],
        "responseSchema": {
            "type": "OBJECT",
            "properties": { "answer": { "type": "STRING" } }
        },
        "systemInstruction": "You are a triage assistant."
    })
}

#[tokio::test]
async fn test_chat_success() {
    let ai = Arc::new(StubAiService::answering("{\"answer\":\"A neurologist.\"}"));
    let server = server(ai.clone());

    let response = server
        .post("/api/ai/chat")
        .authorization_bearer(TEST_TOKEN)
        .json(&chat_body())
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["provider"], "stub");
    assert_eq!(json["response"], "{\"answer\":\"A neurologist.\"}");

    let request = ai.last_request().unwrap();
    assert_eq!(request.history.len(), 2);
    assert_eq!(request.history[1].role, ChatRole::Model);
    assert_eq!(
        request.system_instruction.as_deref(),
        Some("You are a triage assistant.")
    );
}

#[tokio::test]
async fn test_chat_requires_token() {
    let server = server(Arc::new(StubAiService::answering("{}")));

    let response = server.post("/api/ai/chat").json(&chat_body()).await;

    response.assert_status_unauthorized();
    assert_eq!(response.header("www-authenticate"), "Bearer");
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "unauthorized"
    );
}

#[tokio::test]
async fn test_chat_rejects_unknown_token() {
    let server = server(Arc::new(StubAiService::answering("{}")));

    let response = server
        .post("/api/ai/chat")
        .authorization_bearer("some-other-token")
        .json(&chat_body())
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_chat_validation_errors_are_aggregated() {
    let ai = Arc::new(StubAiService::answering("{}"));
    let server = server(ai.clone());

    let response = server
        .post("/api/ai/chat")
        .authorization_bearer(TEST_TOKEN)
        .json(&json!({
            "prompt": " ",
            "history": [{ "role": "user", "content": "" }],
            "responseSchema": {}
        }))
        .await;

    response.assert_status_bad_request();

    let details = &response.json::<serde_json::Value>()["error"]["details"];
    assert!(details["prompt"].is_array());
    assert!(details["responseSchema"].is_array());
    assert!(details["history[0].content"].is_array());
    assert!(ai.last_request().is_none());
}

#[tokio::test]
async fn test_provider_failure_is_bad_gateway() {
    let server = server(Arc::new(StubAiService::failing(503, "overloaded")));

    let response = server
        .post("/api/ai/chat")
        .authorization_bearer(TEST_TOKEN)
        .json(&chat_body())
        .await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "upstream_error");
    assert_eq!(json["error"]["details"]["status"], 503);
    assert_eq!(json["error"]["details"]["provider"], "stub");
}
