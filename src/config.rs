//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `TOKEN_SIGNING_SECRET` - HMAC key used to hash API tokens
//! - `GEMINI_API_KEY` when `AI_PROVIDER=gemini` (default)
//! - `VERTEX_PROJECT` and `VERTEX_ACCESS_TOKEN` when `AI_PROVIDER=vertex`
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `API_TOKEN_HASHES` - Comma-separated token hashes accepted by `/api/*`
//!   (generate with `admin token create`)
//! - `SMTP_HOST`, `SMTP_PORT` (587), `SMTP_FROM`, `SMTP_USER`, `SMTP_PASSWORD` -
//!   SMTP delivery; without `SMTP_HOST` emails are only logged
//! - `GEMINI_MODEL` (`gemini-2.0-flash`), `GEMINI_BASE_URL`
//! - `VERTEX_LOCATION` (`us-central1`), `VERTEX_MODEL` (`gemini-2.0-flash`)
//! - `AI_TIMEOUT_SECONDS` - Provider request timeout (default: 60)

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@healthcare.local";

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_VERTEX_LOCATION: &str = "us-central1";

/// SMTP settings; present only when `SMTP_HOST` is set.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Which generative AI backend serves chat requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    Gemini,
    Vertex,
}

impl FromStr for AiProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(AiProvider::Gemini),
            "vertex" | "vertexai" | "vertex-ai" => Ok(AiProvider::Vertex),
            other => anyhow::bail!("AI_PROVIDER must be 'gemini' or 'vertex', got '{other}'"),
        }
    }
}

impl fmt::Display for AiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiProvider::Gemini => write!(f, "gemini"),
            AiProvider::Vertex => write!(f, "vertex"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub provider: AiProvider,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub vertex_project: Option<String>,
    pub vertex_location: String,
    pub vertex_model: String,
    /// OAuth access token sent as a bearer credential to Vertex AI.
    pub vertex_access_token: Option<String>,
    pub timeout_seconds: u64,
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// HMAC signing secret used to hash API tokens.
    /// Loaded from `TOKEN_SIGNING_SECRET`. Must be non-empty.
    pub token_signing_secret: String,
    /// Hex HMAC-SHA256 hashes of the accepted API tokens.
    pub api_token_hashes: Vec<String>,
    pub smtp: Option<SmtpConfig>,
    pub ai: AiConfig,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or unparsable.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let token_signing_secret =
            env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;

        let api_token_hashes = env::var("API_TOKEN_HASHES")
            .map(|v| parse_list(&v))
            .unwrap_or_default();

        let smtp = Self::smtp_from_env();
        let ai = Self::load_ai().context("Failed to load AI provider configuration")?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            token_signing_secret,
            api_token_hashes,
            smtp,
            ai,
        })
    }

    /// Loads SMTP settings.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that emails should
    /// be logged instead of delivered.
    pub fn smtp_from_env() -> Option<SmtpConfig> {
        let host = env::var("SMTP_HOST").ok().filter(|h| !h.trim().is_empty())?;

        Some(SmtpConfig {
            host,
            port: env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            user: env::var("SMTP_USER").ok(),
            password: env::var("SMTP_PASSWORD").ok(),
        })
    }

    fn load_ai() -> Result<AiConfig> {
        let provider = env::var("AI_PROVIDER")
            .ok()
            .map(|v| v.parse())
            .transpose()?
            .unwrap_or(AiProvider::Gemini);

        let timeout_seconds = env::var("AI_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        Ok(AiConfig {
            provider,
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            vertex_project: env::var("VERTEX_PROJECT").ok(),
            vertex_location: env::var("VERTEX_LOCATION")
                .unwrap_or_else(|_| DEFAULT_VERTEX_LOCATION.to_string()),
            vertex_model: env::var("VERTEX_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            vertex_access_token: env::var("VERTEX_ACCESS_TOKEN").ok(),
            timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - the token signing secret is empty or a token hash is malformed
    /// - the selected AI provider lacks credentials
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.token_signing_secret.is_empty() {
            anyhow::bail!("TOKEN_SIGNING_SECRET must not be empty");
        }

        if let Some(bad) = self
            .api_token_hashes
            .iter()
            .find(|h| h.len() != 64 || !h.bytes().all(|b| b.is_ascii_hexdigit()))
        {
            anyhow::bail!("API_TOKEN_HASHES entries must be 64 hex characters, got '{bad}'");
        }

        if let Some(smtp) = &self.smtp {
            if smtp.port == 0 {
                anyhow::bail!("SMTP_PORT must be greater than 0");
            }
            if smtp.from_address.parse::<lettre::message::Mailbox>().is_err() {
                anyhow::bail!(
                    "SMTP_FROM must be an RFC 5322 address, got '{}'",
                    smtp.from_address
                );
            }
        }

        self.validate_ai()
    }

    fn validate_ai(&self) -> Result<()> {
        let ai = &self.ai;

        if ai.timeout_seconds == 0 {
            anyhow::bail!("AI_TIMEOUT_SECONDS must be greater than 0");
        }

        match ai.provider {
            AiProvider::Gemini => {
                if ai.gemini_api_key.as_deref().is_none_or(str::is_empty) {
                    anyhow::bail!("GEMINI_API_KEY must be set when AI_PROVIDER=gemini");
                }
                let url = url::Url::parse(&ai.gemini_base_url).with_context(|| {
                    format!("GEMINI_BASE_URL is not a valid URL: '{}'", ai.gemini_base_url)
                })?;
                if url.scheme() != "https" && url.scheme() != "http" {
                    anyhow::bail!("GEMINI_BASE_URL must use http or https");
                }
            }
            AiProvider::Vertex => {
                if ai.vertex_project.as_deref().is_none_or(str::is_empty) {
                    anyhow::bail!("VERTEX_PROJECT must be set when AI_PROVIDER=vertex");
                }
                if ai.vertex_access_token.as_deref().is_none_or(str::is_empty) {
                    anyhow::bail!("VERTEX_ACCESS_TOKEN must be set when AI_PROVIDER=vertex");
                }
                if ai.vertex_location.is_empty()
                    || !ai
                        .vertex_location
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-')
                {
                    anyhow::bail!("VERTEX_LOCATION is invalid: '{}'", ai.vertex_location);
                }
            }
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  API tokens: {}", self.api_token_hashes.len());

        match &self.smtp {
            Some(smtp) => tracing::info!(
                "  SMTP: {}:{} as {} (user: {})",
                smtp.host,
                smtp.port,
                smtp.from_address,
                smtp.user.as_deref().unwrap_or("-")
            ),
            None => tracing::info!("  SMTP: disabled (emails are logged)"),
        }

        match self.ai.provider {
            AiProvider::Gemini => tracing::info!(
                "  AI: gemini {} at {} (key: {})",
                self.ai.gemini_model,
                self.ai.gemini_base_url,
                mask_secret(self.ai.gemini_api_key.as_deref().unwrap_or(""))
            ),
            AiProvider::Vertex => tracing::info!(
                "  AI: vertex {} in {}/{}",
                self.ai.vertex_model,
                self.ai.vertex_project.as_deref().unwrap_or("-"),
                self.ai.vertex_location
            ),
        }
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Masks a secret for logging, keeping only its last four characters.
///
/// - `AIzaSyD-1234abcd` → `***abcd`
/// - secrets of four characters or fewer → `***`
fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "***".to_string();
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("***{tail}")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
