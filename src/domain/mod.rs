//! Domain layer: entities, capability traits and repository traits.
//!
//! # Architecture
//!
//! - [`entities`] - Conversation and notification types
//! - [`services`] - Email and AI capability traits
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on the HTTP or infrastructure layers;
//! implementations live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
pub mod services;
