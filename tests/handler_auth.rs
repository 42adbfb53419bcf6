mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;

use common::{RecordingEmailService, StubAiService};
use healthcare_api::api::handlers::{forgot_password_handler, verification_code_handler};

fn server(email: Arc<RecordingEmailService>) -> TestServer {
    let state = common::create_test_state(email, Arc::new(StubAiService::answering("{}")));
    let app = Router::new()
        .route("/api/auth/forgot-password", post(forgot_password_handler))
        .route(
            "/api/auth/verification-code",
            post(verification_code_handler),
        )
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_forgot_password_sends_code() {
    let email = Arc::new(RecordingEmailService::default());
    let server = server(email.clone());

    let response = server
        .post("/api/auth/forgot-password")
        .json(&json!({ "email": "patient@example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::ACCEPTED);
    assert!(response.json::<serde_json::Value>()["message"].is_string());

    let sent = email.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "patient@example.com");
    assert_eq!(sent[0].subject, "Your password reset code");
    assert!(sent[0].body.chars().filter(|c| c.is_ascii_digit()).count() >= 6);
}

#[tokio::test]
async fn test_forgot_password_rejects_invalid_email() {
    let email = Arc::new(RecordingEmailService::default());
    let server = server(email.clone());

    let response = server
        .post("/api/auth/forgot-password")
        .json(&json!({ "email": "not-an-email" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(
        json["error"]["message"],
        "One or more validation errors occurred."
    );
    assert_eq!(json["error"]["details"]["email"][0], "Invalid email format");
    assert!(email.sent().is_empty());
}

#[tokio::test]
async fn test_forgot_password_rejects_empty_email() {
    let server = server(Arc::new(RecordingEmailService::default()));

    let response = server
        .post("/api/auth/forgot-password")
        .json(&json!({ "email": "" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    let messages = json["error"]["details"]["email"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0], "This field is required.");
}

#[tokio::test]
async fn test_malformed_body_is_validation_error() {
    let server = server(Arc::new(RecordingEmailService::default()));

    let response = server
        .post("/api/auth/forgot-password")
        .json(&json!({ "email": 42 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(json["error"]["details"]["$"][0].is_string());
}

#[tokio::test]
async fn test_delivery_failure_is_bad_gateway() {
    let server = server(Arc::new(RecordingEmailService::failing()));

    let response = server
        .post("/api/auth/verification-code")
        .json(&json!({ "email": "patient@example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "upstream_error"
    );
}

#[tokio::test]
async fn test_verification_code_sends_code() {
    let email = Arc::new(RecordingEmailService::default());
    let server = server(email.clone());

    let response = server
        .post("/api/auth/verification-code")
        .json(&json!({ "email": "patient@example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::ACCEPTED);
    assert_eq!(email.sent()[0].subject, "Verify your email address");
}

#[tokio::test]
async fn test_issued_codes_are_not_echoed() {
    let email = Arc::new(RecordingEmailService::default());
    let server = server(email.clone());

    let reset = server
        .post("/api/auth/forgot-password")
        .json(&json!({ "email": "patient@example.com" }))
        .await;
    let verify = server
        .post("/api/auth/verification-code")
        .json(&json!({ "email": "patient@example.com" }))
        .await;

    let sent = email.sent();
    assert_eq!(sent.len(), 2);
    for (response, mail) in [(reset, &sent[0]), (verify, &sent[1])] {
        response.assert_status(axum::http::StatusCode::ACCEPTED);
        let code: String = mail.body.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(code.len(), 6);
        assert!(!response.text().contains(&code));
    }
}
