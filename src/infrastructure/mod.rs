//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete transports for email, AI providers and API token lookup.
//!
//! # Modules
//!
//! - [`ai`] - Gemini and Vertex AI clients
//! - [`auth`] - API token store
//! - [`email`] - SMTP and logging mailers

pub mod ai;
pub mod auth;
pub mod email;
