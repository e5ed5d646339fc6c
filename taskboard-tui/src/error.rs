//! Error types for the TUI.

use crate::config::ConfigError;
use crate::persistence::PersistenceError;
use taskboard_core::{LlmError, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}
