//! In-memory domain cache.
//!
//! The cache owns the one [`Snapshot`] every view renders from. Loads are
//! split in two so that the network part can run on another task:
//! [`DomainCache::begin_load`] hands out a ticket, [`LoadResult::fetch`]
//! reads all three sheets, and [`DomainCache::apply_load`] swaps the result
//! in unless a newer load has already been applied.

use crate::{fetch_collection, RemoteStore};
use serde_json::Value;
use std::collections::HashSet;
use taskboard_core::{
    Collection, FetchOutcome, Project, Record, Snapshot, StoreError, Task, TeamMember,
};
use tracing::{debug, info, warn};

/// Monotonic identifier of one load. Later tickets win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Everything one load read, tagged with its ticket.
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub ticket: LoadTicket,
    pub tasks: FetchOutcome<Task>,
    pub projects: FetchOutcome<Project>,
    pub members: FetchOutcome<TeamMember>,
}

impl LoadResult {
    /// Read all three sheets concurrently and wait for every one of them.
    pub async fn fetch(store: &dyn RemoteStore, ticket: LoadTicket) -> Self {
        let (tasks, projects, members) = tokio::join!(
            fetch_collection::<Task>(store),
            fetch_collection::<Project>(store),
            fetch_collection::<TeamMember>(store),
        );
        Self {
            ticket,
            tasks,
            projects,
            members,
        }
    }

    /// Collections whose read failed, with the reason.
    pub fn failures(&self) -> Vec<(Collection, StoreError)> {
        let mut failures = Vec::new();
        if let Some(err) = self.tasks.error() {
            failures.push((Collection::Tasks, err.clone()));
        }
        if let Some(err) = self.projects.error() {
            failures.push((Collection::Projects, err.clone()));
        }
        if let Some(err) = self.members.error() {
            failures.push((Collection::TeamMembers, err.clone()));
        }
        failures
    }
}

/// What applying a load did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub ticket: LoadTicket,
    /// False when a newer load had already been applied.
    pub applied: bool,
    pub failures: Vec<(Collection, StoreError)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.applied && self.failures.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct DomainCache {
    snapshot: Snapshot,
    revision: u64,
    next_ticket: u64,
    applied_ticket: Option<LoadTicket>,
    stale: HashSet<Collection>,
}

impl DomainCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that starts from `snapshot`, as if it had been loaded.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Number of loads applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the last applied load failed to read `collection`, leaving
    /// older rows in place.
    pub fn is_stale(&self, collection: Collection) -> bool {
        self.stale.contains(&collection)
    }

    pub fn stale_collections(&self) -> Vec<Collection> {
        Collection::ALL
            .into_iter()
            .filter(|c| self.stale.contains(c))
            .collect()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.next_ticket += 1;
        LoadTicket(self.next_ticket)
    }

    /// Apply a finished load.
    ///
    /// A result older than the newest applied one is dropped whole. For a
    /// result that is applied, each `Loaded` collection replaces the cached
    /// one, even when empty, and each `Failed` collection keeps its previous
    /// rows and is marked stale.
    pub fn apply_load(&mut self, result: LoadResult) -> LoadReport {
        let failures = result.failures();
        if self.applied_ticket.is_some_and(|applied| result.ticket <= applied) {
            debug!(ticket = result.ticket.value(), "discarding superseded load");
            return LoadReport {
                ticket: result.ticket,
                applied: false,
                failures,
            };
        }

        self.apply_outcome(Collection::Tasks, result.tasks, |s| &mut s.tasks);
        self.apply_outcome(Collection::Projects, result.projects, |s| &mut s.projects);
        self.apply_outcome(Collection::TeamMembers, result.members, |s| &mut s.members);
        self.applied_ticket = Some(result.ticket);
        self.revision += 1;

        info!(
            ticket = result.ticket.value(),
            tasks = self.snapshot.tasks.len(),
            projects = self.snapshot.projects.len(),
            members = self.snapshot.members.len(),
            failed = failures.len(),
            "load applied"
        );
        LoadReport {
            ticket: result.ticket,
            applied: true,
            failures,
        }
    }

    fn apply_outcome<R>(
        &mut self,
        collection: Collection,
        outcome: FetchOutcome<R>,
        rows: impl FnOnce(&mut Snapshot) -> &mut Vec<R>,
    ) {
        match outcome {
            FetchOutcome::Loaded(records) => {
                *rows(&mut self.snapshot) = records;
                self.stale.remove(&collection);
            }
            FetchOutcome::Failed(err) => {
                warn!(%collection, error = %err, "keeping previous rows");
                self.stale.insert(collection);
            }
        }
    }

    /// Begin, fetch and apply in one call.
    pub async fn load(&mut self, store: &dyn RemoteStore) -> LoadReport {
        let ticket = self.begin_load();
        let result = LoadResult::fetch(store, ticket).await;
        self.apply_load(result)
    }

    /// Merge `patch`'s fields into the first record matching `predicate`.
    ///
    /// Returns whether a record was patched. A patch that would make the
    /// record undecodable is rejected and leaves it unchanged.
    pub fn apply_local_patch<R: Record>(
        &mut self,
        predicate: impl Fn(&R) -> bool,
        patch: &Value,
    ) -> Result<bool, StoreError> {
        let Some(record) = R::rows_mut(&mut self.snapshot)
            .iter_mut()
            .find(|r| predicate(r))
        else {
            return Ok(false);
        };

        let mut merged = serde_json::to_value(&*record).map_err(decode)?;
        if let (Some(target), Some(fields)) = (merged.as_object_mut(), patch.as_object()) {
            for (field, value) in fields {
                target.insert(field.clone(), value.clone());
            }
        }
        *record = serde_json::from_value(merged).map_err(decode)?;
        Ok(true)
    }

    /// Replace the record whose key is `key`. Returns whether one was found.
    pub fn replace<R: Record>(&mut self, key: &str, record: R) -> bool {
        match R::rows_mut(&mut self.snapshot)
            .iter_mut()
            .find(|r| r.key() == key)
        {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }
}

fn decode(err: serde_json::Error) -> StoreError {
    StoreError::Decode {
        reason: err.to_string(),
    }
}
