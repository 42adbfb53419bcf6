//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service status and the configured outbound backends.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "email": { "status": "ok", "message": "Transport: smtp" },
///     "ai": { "status": "ok", "message": "Provider: gemini" }
///   }
/// }
/// ```
///
/// The log-only mailer is reported as `disabled`; the service is still
/// healthy because requests keep succeeding.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let email_check = check_email(&state);
    let ai_check = CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("Provider: {}", state.chat_service.provider_name())),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            email: email_check,
            ai: ai_check,
        },
    })
}

fn check_email(state: &AppState) -> CheckStatus {
    match state.account_service.transport_name() {
        "log" => CheckStatus {
            status: "disabled".to_string(),
            message: Some("SMTP not configured, emails are logged".to_string()),
        },
        transport => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Transport: {transport}")),
        },
    }
}
