//! Gemini `generateContent` provider

pub mod client;
pub mod types;

pub use client::{GeminiClient, DEFAULT_ENDPOINT};
pub use types::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
