//! In-memory store for tests.

use crate::{MutationOutcome, MutationRequest, RemoteStore};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use taskboard_core::{Collection, MutationAction, StoreError};

#[derive(Debug, Default)]
struct MockState {
    rows: HashMap<Collection, Vec<Value>>,
    fetch_failures: HashMap<Collection, StoreError>,
    mutation_failures: VecDeque<StoreError>,
    mutations: Vec<MutationRequest>,
    fetch_count: usize,
}

/// A [`RemoteStore`] backed by in-memory rows.
///
/// Successful writes are applied to the rows the way the real sheet applies
/// them, so a reload after a write sees it. Every write request is recorded.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    state: Arc<Mutex<MockState>>,
}

fn lock(state: &Mutex<MockState>) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rows of one sheet.
    pub fn seed_rows(&self, collection: Collection, rows: Vec<Value>) {
        lock(&self.state).rows.insert(collection, rows);
    }

    /// Seed typed records.
    pub fn seed<R: serde::Serialize>(&self, collection: Collection, records: &[R]) {
        let rows = records
            .iter()
            .filter_map(|r| serde_json::to_value(r).ok())
            .collect();
        self.seed_rows(collection, rows);
    }

    pub fn rows(&self, collection: Collection) -> Vec<Value> {
        lock(&self.state)
            .rows
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Make every read of `collection` fail until [`MockStore::heal_fetch`].
    pub fn fail_fetch(&self, collection: Collection, error: StoreError) {
        lock(&self.state).fetch_failures.insert(collection, error);
    }

    pub fn heal_fetch(&self, collection: Collection) {
        lock(&self.state).fetch_failures.remove(&collection);
    }

    /// Fail the next write with `error`. Queued failures are used in order.
    pub fn fail_next_mutation(&self, error: StoreError) {
        lock(&self.state).mutation_failures.push_back(error);
    }

    /// Every write request received, in order, including failed ones.
    pub fn mutations(&self) -> Vec<MutationRequest> {
        lock(&self.state).mutations.clone()
    }

    pub fn mutation_count(&self) -> usize {
        lock(&self.state).mutations.len()
    }

    /// Number of sheet reads received.
    pub fn fetch_count(&self) -> usize {
        lock(&self.state).fetch_count
    }
}

fn key_of<'a>(row: &'a Value, key_field: &str) -> Option<&'a Value> {
    row.get(key_field)
}

fn apply_to_rows(rows: &mut Vec<Value>, key_field: &str, request: &MutationRequest) -> MutationOutcome {
    let key = key_of(&request.data, key_field).cloned();
    match request.action {
        MutationAction::Create => {
            rows.push(request.data.clone());
        }
        MutationAction::Update => {
            let slot = rows
                .iter_mut()
                .find(|row| key.is_some() && key_of(row, key_field) == key.as_ref())
                .ok_or_else(|| StoreError::Application {
                    message: "Record not found".to_string(),
                })?;
            *slot = request.data.clone();
        }
        MutationAction::Delete => {
            let before = rows.len();
            rows.retain(|row| key.is_none() || key_of(row, key_field) != key.as_ref());
            if rows.len() == before {
                return Err(StoreError::Application {
                    message: "Record not found".to_string(),
                });
            }
        }
    }
    Ok(json!({"status": "success"}))
}

#[async_trait]
impl RemoteStore for MockStore {
    async fn fetch_rows(&self, collection: Collection) -> Result<Vec<Value>, StoreError> {
        let mut state = lock(&self.state);
        state.fetch_count += 1;
        if let Some(err) = state.fetch_failures.get(&collection) {
            return Err(err.clone());
        }
        Ok(state.rows.get(&collection).cloned().unwrap_or_default())
    }

    async fn apply(&self, request: &MutationRequest) -> MutationOutcome {
        let mut state = lock(&self.state);
        state.mutations.push(request.clone());
        if let Some(err) = state.mutation_failures.pop_front() {
            return Err(err);
        }
        let collection = request.collection().ok_or_else(|| StoreError::Application {
            message: format!("Unknown sheet: {}", request.sheet_name),
        })?;
        let rows = state.rows.entry(collection).or_default();
        apply_to_rows(rows, collection.key_field(), request)
    }
}
