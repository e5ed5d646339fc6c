//! Event types for the TUI event loop.

use crate::coordinator::{GenerationOutcome, PendingMutation};
use crossterm::event::KeyEvent;
use taskboard_core::{BoardError, StoreError};
use taskboard_store::LoadResult;

#[derive(Debug)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
    LoadFinished(LoadResult),
    MutationFinished {
        pending: PendingMutation,
        outcome: Result<serde_json::Value, StoreError>,
    },
    GenerationFinished(GenerationOutcome),
    SuggestionFinished {
        task_name: String,
        result: Result<String, BoardError>,
    },
}
