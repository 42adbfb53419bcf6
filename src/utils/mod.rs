//! Utility functions for token handling and code generation.
//!
//! - [`token`] - API token generation and HMAC hashing
//! - [`code_generator`] - Verification codes and temporary passwords

pub mod code_generator;
pub mod token;
