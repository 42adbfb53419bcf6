//! Repository trait definitions for the domain layer.
//!
//! Record persistence belongs to an external store; the only repository this
//! service owns is the API token lookup used by bearer authentication.

pub mod token_repository;

pub use token_repository::TokenRepository;

#[cfg(test)]
pub use token_repository::MockTokenRepository;
