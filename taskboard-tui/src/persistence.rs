//! The small JSON file that remembers the theme and last view between runs.

use crate::nav::View;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub active_view: View,
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// `None` when no state has been saved yet.
pub fn load(path: &Path) -> Result<Option<PersistedState>, PersistenceError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Saved state, or the defaults when the file is missing or unreadable.
pub fn load_or_default(path: &Path) -> PersistedState {
    match load(path) {
        Ok(state) => state.unwrap_or_default(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unreadable UI state");
            PersistedState::default()
        }
    }
}

/// Write through a sibling temp file so a crash never leaves half a file.
pub fn save(path: &Path, state: &PersistedState) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let staging = staging_path(path);
    std::fs::write(&staging, serde_json::to_vec_pretty(state)?)?;
    std::fs::rename(&staging, path)?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
