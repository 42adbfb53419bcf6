//! HTTP server initialization and runtime setup.
//!
//! Builds the outbound transports and services from configuration and runs
//! the Axum server until a shutdown signal arrives.

use crate::application::services::{AccountService, AuthService, ChatService};
use crate::config::{AiConfig, AiProvider, Config, SmtpConfig};
use crate::domain::services::{AiChatService, EmailService};
use crate::infrastructure::ai::{GeminiClient, VertexAiClient};
use crate::infrastructure::auth::StaticTokenRepository;
use crate::infrastructure::email::{LogEmailService, SmtpEmailService};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the email transport: SMTP when configured, otherwise the logging
/// fallback.
///
/// # Errors
///
/// Returns an error if the SMTP sender address or host is invalid.
pub fn build_email_service(smtp: Option<&SmtpConfig>) -> Result<Arc<dyn EmailService>> {
    match smtp {
        Some(smtp) => {
            let service =
                SmtpEmailService::new(smtp).context("Failed to initialize SMTP transport")?;
            tracing::info!(host = %smtp.host, port = smtp.port, "Email enabled (SMTP)");
            Ok(Arc::new(service))
        }
        None => {
            tracing::info!("Email disabled (log only)");
            Ok(Arc::new(LogEmailService::new()))
        }
    }
}

/// Builds the AI provider selected by `AI_PROVIDER`.
///
/// # Errors
///
/// Returns an error if the provider's credentials are missing or the HTTP
/// client cannot be constructed.
pub fn build_ai_service(ai: &AiConfig) -> Result<Arc<dyn AiChatService>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(ai.timeout_seconds))
        .build()
        .context("Failed to build HTTP client")?;

    let service: Arc<dyn AiChatService> = match ai.provider {
        AiProvider::Gemini => {
            let api_key = ai
                .gemini_api_key
                .clone()
                .context("GEMINI_API_KEY must be set when AI_PROVIDER=gemini")?;
            Arc::new(GeminiClient::new(
                client,
                ai.gemini_base_url.clone(),
                ai.gemini_model.clone(),
                api_key,
            ))
        }
        AiProvider::Vertex => {
            let project = ai
                .vertex_project
                .clone()
                .context("VERTEX_PROJECT must be set when AI_PROVIDER=vertex")?;
            let access_token = ai
                .vertex_access_token
                .clone()
                .context("VERTEX_ACCESS_TOKEN must be set when AI_PROVIDER=vertex")?;
            Arc::new(VertexAiClient::new(
                client,
                project,
                ai.vertex_location.clone(),
                ai.vertex_model.clone(),
                access_token,
            ))
        }
    };

    tracing::info!(provider = service.provider(), "AI provider configured");
    Ok(service)
}

/// Assembles the shared application state from configuration.
///
/// # Errors
///
/// Returns an error if a transport cannot be constructed.
pub fn build_state(config: &Config) -> Result<AppState> {
    let token_repository = Arc::new(StaticTokenRepository::new(
        config.api_token_hashes.iter().cloned(),
    ));
    if config.api_token_hashes.is_empty() {
        tracing::warn!("API_TOKEN_HASHES is empty, protected endpoints will reject every request");
    }

    let auth_service = Arc::new(AuthService::new(
        token_repository,
        config.token_signing_secret.clone(),
    ));
    let account_service = Arc::new(AccountService::new(build_email_service(
        config.smtp.as_ref(),
    )?));
    let chat_service = Arc::new(ChatService::new(build_ai_service(&config.ai)?));

    Ok(AppState::new(auth_service, account_service, chat_service))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - A transport cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
