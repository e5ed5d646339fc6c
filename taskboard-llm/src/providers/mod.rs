//! Generation service providers
//!
//! Each provider implements [`crate::CompletionTransport`] for one hosted
//! API.

pub mod gemini;

pub use gemini::GeminiClient;
