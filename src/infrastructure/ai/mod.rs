//! Generative AI providers.
//!
//! Both providers speak the `generateContent` JSON protocol and differ only in
//! endpoint and credentials:
//!
//! - [`GeminiClient`] - Generative Language API, API key header
//! - [`VertexAiClient`] - Vertex AI publisher models, OAuth bearer token

pub mod gemini;
pub mod vertex;
mod wire;

pub use gemini::GeminiClient;
pub use vertex::VertexAiClient;
