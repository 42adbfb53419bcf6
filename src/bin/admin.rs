//! CLI administration tool for healthcare-api.
//!
//! Provides commands for issuing API tokens, checking passwords against the
//! complexity rule and sending test emails through the configured mailer.
//!
//! # Usage
//!
//! ```bash
//! # Create a new API token and print its hash for API_TOKEN_HASHES
//! cargo run --bin admin -- token create
//!
//! # Hash an existing token
//! cargo run --bin admin -- token hash "my-token"
//!
//! # Check a password against the complexity rule
//! cargo run --bin admin -- password check "Abc12!"
//!
//! # Send a verification code / temporary password through the mailer
//! cargo run --bin admin -- email test --to user@example.com
//! cargo run --bin admin -- email new-user --to staff@example.com
//! ```
//!
//! # Environment Variables
//!
//! - `TOKEN_SIGNING_SECRET` (required for `token`): HMAC key shared with the server
//! - `SMTP_*` (optional for `email`): without `SMTP_HOST` emails are only logged

use healthcare_api::api::dto::VerificationCodeRequestDto;
use healthcare_api::application::services::AccountService;
use healthcare_api::config::Config;
use healthcare_api::server::build_email_service;
use healthcare_api::utils::token::{generate_token, hash_token};
use healthcare_api::validation::PasswordPolicy;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use tracing_subscriber::EnvFilter;
use validator::Validate;

/// CLI tool for managing healthcare-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Password rule tools
    Password {
        #[command(subcommand)]
        action: PasswordAction,
    },

    /// Send emails through the configured transport
    Email {
        #[command(subcommand)]
        action: EmailAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token
    Create {
        /// Token name (e.g., "Mobile App", "Patient Portal")
        #[arg(short, long)]
        name: Option<String>,

        /// Custom token value (optional, auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the hash of an existing token
    Hash {
        token: String,
    },
}

#[derive(Subcommand)]
enum PasswordAction {
    /// Check a candidate password against the complexity rule
    Check {
        candidate: String,

        /// Disable the upper length bound
        #[arg(long)]
        unbounded: bool,
    },
}

#[derive(Subcommand)]
enum EmailAction {
    /// Send a verification code email
    Test {
        #[arg(long)]
        to: String,
    },

    /// Issue a temporary password and email it
    NewUser {
        #[arg(long)]
        to: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token { action } => handle_token_action(action)?,
        Commands::Password { action } => handle_password_action(action)?,
        Commands::Email { action } => handle_email_action(action).await?,
    }

    Ok(())
}

fn signing_secret() -> Result<String> {
    let secret =
        std::env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;
    if secret.is_empty() {
        anyhow::bail!("TOKEN_SIGNING_SECRET must not be empty");
    }
    Ok(secret)
}

/// Dispatches token management commands.
fn handle_token_action(action: TokenAction) -> Result<()> {
    let secret = signing_secret()?;

    match action {
        TokenAction::Create { name, token, yes } => create_token(&secret, name, token, yes)?,
        TokenAction::Hash { token } => println!("{}", hash_token(&secret, &token)),
    }

    Ok(())
}

/// Creates a new API token with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for token name (or use provided)
/// 2. Generate random token or use provided value
/// 3. Display token details with warning
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Print the HMAC hash to append to `API_TOKEN_HASHES`
///
/// The raw token is displayed once; only its hash goes into configuration.
fn create_token(
    secret: &str,
    name: Option<String>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Create API Token".bright_blue().bold());
    println!();

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("Patient Portal")
            .interact_text()?,
    };

    let token_value = match token {
        Some(t) => {
            println!("{}", "⚠️  Using provided token value".yellow());
            t
        }
        None => {
            let generated = generate_token();
            println!("{}", "✨ Generated new token".green());
            generated
        }
    };

    println!();
    println!("{}", "Token details:".bright_white().bold());
    println!("  Name:  {}", token_name.cyan());
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let token_hash = hash_token(secret, &token_value);

    println!();
    println!("{}", "✅ Token created successfully!".green().bold());
    println!();
    println!("{}", "Append this hash to API_TOKEN_HASHES:".bright_white());
    println!("  {}", token_hash.bright_cyan());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/ai/chat",
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

fn handle_password_action(action: PasswordAction) -> Result<()> {
    match action {
        PasswordAction::Check {
            candidate,
            unbounded,
        } => {
            let policy = if unbounded {
                PasswordPolicy::unbounded()
            } else {
                PasswordPolicy::default()
            };

            match policy.check(&candidate) {
                Ok(()) => println!("{}", "✅ Password meets the complexity rule".green()),
                Err(violation) => {
                    println!("{} {}", "❌".red(), violation.message().red());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

async fn handle_email_action(action: EmailAction) -> Result<()> {
    // The log-only mailer reports through tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .init();

    let smtp = Config::smtp_from_env();
    let account_service = AccountService::new(build_email_service(smtp.as_ref())?);

    println!(
        "{} {}",
        "📧 Transport:".bright_blue().bold(),
        account_service.transport_name().cyan()
    );

    match action {
        EmailAction::Test { to } => {
            let request = VerificationCodeRequestDto { email: to.clone() };
            request
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid recipient: {}", e))?;
            account_service
                .request_verification_code(&request)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to send email: {}", e))?;
            println!("{} {}", "✅ Verification code sent to".green(), to.cyan());
        }
        EmailAction::NewUser { to } => {
            account_service
                .issue_temporary_password(&to)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to send email: {}", e))?;
            println!("{} {}", "✅ Temporary password sent to".green(), to.cyan());
        }
    }

    Ok(())
}
