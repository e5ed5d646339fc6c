//! Taskboard Store - Remote Store Client and Domain Cache
//!
//! The remote store is a spreadsheet exposed as a small JSON web API: a GET
//! per sheet returns every row, and a POST applies one CREATE, UPDATE or
//! DELETE. [`RemoteStore`] is the seam between that API and the rest of the
//! client; [`SheetsClient`] talks HTTP and [`MockStore`] keeps rows in
//! memory for tests.
//!
//! [`DomainCache`] owns the snapshot every view renders from.

pub mod cache;
pub mod mock;
pub mod sheets;

pub use cache::{DomainCache, LoadReport, LoadResult, LoadTicket};
pub use mock::MockStore;
pub use sheets::SheetsClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_core::{Collection, FetchOutcome, MutationAction, Record, StoreError};
use tracing::{debug, warn};

/// Outcome of one write: the store's JSON reply, or why it failed.
pub type MutationOutcome = Result<Value, StoreError>;

/// Body of a write request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationRequest {
    pub action: MutationAction,
    #[serde(rename = "sheetName")]
    pub sheet_name: String,
    pub data: Value,
}

impl MutationRequest {
    pub fn new(action: MutationAction, collection: Collection, data: Value) -> Self {
        Self {
            action,
            sheet_name: collection.sheet_name().to_string(),
            data,
        }
    }

    /// The sheet this request targets, if the name is one of the three.
    pub fn collection(&self) -> Option<Collection> {
        Collection::ALL
            .into_iter()
            .find(|c| c.sheet_name() == self.sheet_name)
    }
}

/// Raw access to the spreadsheet API.
///
/// Implementations send exactly what they are given: one sheet read or one
/// record write per call, never batched and never retried.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Every row of one sheet, undecoded.
    async fn fetch_rows(&self, collection: Collection) -> Result<Vec<Value>, StoreError>;

    /// Apply one write and return the store's reply.
    async fn apply(&self, request: &MutationRequest) -> MutationOutcome;
}

/// Read and decode one collection.
///
/// Rows that do not decode are skipped with a warning; only a failed read
/// makes the whole collection `Failed`.
pub async fn fetch_collection<R: Record>(store: &dyn RemoteStore) -> FetchOutcome<R> {
    let rows = match store.fetch_rows(R::COLLECTION).await {
        Ok(rows) => rows,
        Err(err) => {
            warn!(collection = %R::COLLECTION, error = %err, "fetch failed");
            return FetchOutcome::Failed(err);
        }
    };

    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<R>(row) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(collection = %R::COLLECTION, row = index, error = %err, "skipping undecodable row");
            }
        }
    }
    FetchOutcome::Loaded(records)
}

/// Send one record write.
///
/// CREATE and UPDATE carry the full record; DELETE carries only the key
/// column.
pub async fn mutate<R: Record>(
    store: &dyn RemoteStore,
    action: MutationAction,
    record: &R,
) -> MutationOutcome {
    let data = match action {
        MutationAction::Delete => record.key_payload(),
        MutationAction::Create | MutationAction::Update => {
            serde_json::to_value(record).map_err(|e| StoreError::Decode {
                reason: e.to_string(),
            })?
        }
    };
    let request = MutationRequest::new(action, R::COLLECTION, data);
    debug!(action = %action, sheet = %request.sheet_name, key = record.key(), "submitting mutation");
    store.apply(&request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use taskboard_core::{Task, TaskStatus};

    #[test]
    fn test_request_wire_shape() {
        let request = MutationRequest::new(
            MutationAction::Delete,
            Collection::Tasks,
            json!({"TaskNo": "T-1"}),
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"action": "DELETE", "sheetName": "Tasks", "data": {"TaskNo": "T-1"}})
        );
        assert_eq!(request.collection(), Some(Collection::Tasks));
    }

    #[tokio::test]
    async fn test_fetch_skips_bad_rows() {
        let store = MockStore::new();
        store.seed_rows(
            Collection::Tasks,
            vec![
                json!({"TaskNo": "T-1", "TaskName": "Good", "TaskStatus": "Done"}),
                json!(["not", "an", "object"]),
                json!({"TaskNo": "T-2", "TaskName": "Also good"}),
            ],
        );
        let outcome = fetch_collection::<Task>(&store).await;
        let rows = outcome.into_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].task_status, TaskStatus::Done);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_tagged() {
        let store = MockStore::new();
        store.fail_fetch(
            Collection::Projects,
            StoreError::Http {
                status: 500,
                body: "oops".to_string(),
            },
        );
        let outcome = fetch_collection::<taskboard_core::Project>(&store).await;
        assert!(outcome.is_failed());
    }

    #[tokio::test]
    async fn test_delete_sends_only_key() {
        let store = MockStore::new();
        let task = Task::new("T-5", "Gone").with_project("Apollo");
        mutate(&store, MutationAction::Delete, &task).await.unwrap();
        let calls = store.mutations();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].data, json!({"TaskNo": "T-5"}));
    }
}
