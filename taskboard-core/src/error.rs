//! Error types for taskboard operations

use crate::enums::{Collection, MutationPhase};
use thiserror::Error;

/// Remote store errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Request to store failed: {reason}")]
    Transport { reason: String },

    #[error("Store returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Store reported an error: {message}")]
    Application { message: String },

    #[error("Could not decode store response: {reason}")]
    Decode { reason: String },
}

/// Generation service errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LlmError {
    #[error("No generation API key configured")]
    ProviderNotConfigured,

    #[error("Request to {provider} failed with status {status}: {message}")]
    RequestFailed {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("Rate limited by {provider} after {attempts} attempts")]
    RetriesExhausted { provider: String, attempts: u32 },

    #[error("Empty response from {provider}")]
    EmptyResponse { provider: String },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("Request to {provider} could not be sent: {reason}")]
    Transport { provider: String, reason: String },
}

/// Validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Mutation coordination errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MutationError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Another change to {collection} record '{key}' is still in flight")]
    Conflict { collection: Collection, key: String },

    #[error("No {collection} record with key '{key}'")]
    NotFound { collection: Collection, key: String },

    #[error("Invalid mutation transition from {from} to {to}")]
    InvalidTransition { from: MutationPhase, to: MutationPhase },
}

/// Master error type for all taskboard errors.
#[derive(Debug, Clone, Error)]
pub enum BoardError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),
}

/// Result type alias for taskboard operations.
pub type BoardResult<T> = Result<T, BoardError>;

// =============================================================================
// TESTS
// =============================================================================
