//! Mutation coordinator.
//!
//! Every user change to the board goes through here. An operation is split
//! into three steps so that the network wait can run off the event loop:
//!
//! - `begin_*` validates, applies any optimistic change to the cache and
//!   registers the record as in flight;
//! - [`MutationCoordinator::submit`] sends the write and touches nothing
//!   but the store;
//! - [`MutationCoordinator::complete`] applies the outcome to the cache,
//!   schedules the follow-up reload and produces the user notice.
//!
//! [`MutationCoordinator::run`] chains the last two for callers that simply
//! await.

use crate::notifications::Notification;
use crate::reload::ReloadScheduler;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use taskboard_core::forms::require_field;
use taskboard_core::{
    generated_task_no, BoardColumn, BoardError, Collection, FormFields, LlmError, MemberForm,
    MutationAction, MutationError, MutationPhase, Project, ProjectForm, Record, Snapshot,
    StoreError, Task, TaskForm, TaskStatus, TeamMember, ValidationError,
};
use taskboard_llm::{GeneratedTask, TaskAssistant};
use taskboard_store::{
    mutate, DomainCache, LoadReport, LoadResult, LoadTicket, MutationOutcome, MutationRequest,
    RemoteStore,
};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Shown when the generation service is missing its key or refuses it.
pub const ASSISTANT_UNAVAILABLE: &str =
    "Gemini AI feature is not available. API key may be missing or invalid.";

// ============================================================================
// MUTATION TOKENS
// ============================================================================

/// What a pending write does to the cache when it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
    /// A card moved between board columns; the cache already shows `to`.
    Move { from: TaskStatus, to: TaskStatus },
    Delete,
}

/// A write that has been validated and registered but not yet completed.
#[derive(Debug)]
pub struct PendingMutation {
    kind: MutationKind,
    collection: Collection,
    key: String,
    request: MutationRequest,
    sequence: u64,
    phase: MutationPhase,
}

impl PendingMutation {
    pub fn kind(&self) -> &MutationKind {
        &self.kind
    }

    pub fn action(&self) -> MutationAction {
        self.request.action
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    /// Key of the record as it was in the cache when the write began.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn request(&self) -> &MutationRequest {
        &self.request
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn phase(&self) -> MutationPhase {
        self.phase
    }
}

/// A delete the user has asked for but not yet confirmed.
///
/// Nothing is sent until the token is handed to
/// [`MutationCoordinator::confirm_delete`].
#[derive(Debug, PartialEq, Eq)]
pub struct PendingDelete {
    collection: Collection,
    key: String,
    payload: Value,
}

impl PendingDelete {
    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

// ============================================================================
// REPORTS
// ============================================================================

/// What a completed write did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationReport {
    pub action: MutationAction,
    pub collection: Collection,
    pub key: String,
    /// `Succeeded` or `Failed`.
    pub phase: MutationPhase,
    pub error: Option<StoreError>,
    pub reload_scheduled: bool,
    pub notification: Option<Notification>,
}

impl MutationReport {
    pub fn succeeded(&self) -> bool {
        self.phase == MutationPhase::Succeeded
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The card was dropped on the column it already sits in.
    Unchanged,
    Moved(MutationReport),
}

/// Result of saving a batch of generated tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSaved {
    pub requested: usize,
    pub created: usize,
    pub failed: usize,
}

/// A finished generation run, ready to be applied to the coordinator.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub project_name: String,
    pub result: Result<GenerationSaved, LlmError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub project_name: String,
    pub saved: Option<GenerationSaved>,
    pub error: Option<LlmError>,
    pub reload_scheduled: bool,
    pub notification: Notification,
}

// ============================================================================
// COORDINATOR
// ============================================================================

pub struct MutationCoordinator {
    store: Arc<dyn RemoteStore>,
    cache: DomainCache,
    reloads: ReloadScheduler,
    in_flight: HashMap<(Collection, String), u64>,
    next_sequence: u64,
    reload_delay: Duration,
}

impl MutationCoordinator {
    pub fn new(store: Arc<dyn RemoteStore>, reload_delay: Duration) -> Self {
        Self {
            store,
            cache: DomainCache::new(),
            reloads: ReloadScheduler::new(),
            in_flight: HashMap::new(),
            next_sequence: 0,
            reload_delay,
        }
    }

    pub fn with_cache(mut self, cache: DomainCache) -> Self {
        self.cache = cache;
        self
    }

    /// Shared handle to the store, for work spawned off the event loop.
    pub fn store(&self) -> Arc<dyn RemoteStore> {
        Arc::clone(&self.store)
    }

    pub fn cache(&self) -> &DomainCache {
        &self.cache
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.cache.snapshot()
    }

    pub fn reload_deadline(&self) -> Option<Instant> {
        self.reloads.deadline()
    }

    /// Whether a scheduled reload is due at `now`. Clears it when it is.
    pub fn take_due_reload(&mut self, now: Instant) -> bool {
        self.reloads.take_due(now)
    }

    pub fn is_in_flight(&self, collection: Collection, key: &str) -> bool {
        self.in_flight.contains_key(&(collection, key.to_string()))
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Names of all team members, in sheet order.
    pub fn member_names(&self) -> Vec<String> {
        self.snapshot()
            .members
            .iter()
            .map(|m| m.full_name.clone())
            .collect()
    }

    fn schedule_reload(&mut self) {
        self.reloads.schedule(Instant::now(), self.reload_delay);
    }

    fn register(&mut self, collection: Collection, key: &str) -> Result<u64, MutationError> {
        let slot = (collection, key.to_string());
        if self.in_flight.contains_key(&slot) {
            return Err(MutationError::Conflict {
                collection,
                key: key.to_string(),
            });
        }
        self.next_sequence += 1;
        self.in_flight.insert(slot, self.next_sequence);
        Ok(self.next_sequence)
    }

    fn release(&mut self, pending: &PendingMutation) {
        let slot = (pending.collection, pending.key.clone());
        if self.in_flight.get(&slot) == Some(&pending.sequence) {
            self.in_flight.remove(&slot);
        }
    }

    fn pending(
        &mut self,
        kind: MutationKind,
        action: MutationAction,
        collection: Collection,
        key: &str,
        data: Value,
    ) -> Result<PendingMutation, MutationError> {
        let phase = MutationPhase::Idle.advance(MutationPhase::Validating)?;
        let sequence = self.register(collection, key)?;
        let phase = phase.advance(MutationPhase::Submitting)?;
        Ok(PendingMutation {
            kind,
            collection,
            key: key.to_string(),
            request: MutationRequest::new(action, collection, data),
            sequence,
            phase,
        })
    }

    // ------------------------------------------------------------------------
    // Loads
    // ------------------------------------------------------------------------

    pub fn begin_load(&mut self) -> LoadTicket {
        self.cache.begin_load()
    }

    /// Apply a finished load and produce a warning for each collection that
    /// could not be read.
    pub fn apply_load(&mut self, result: LoadResult) -> (LoadReport, Vec<Notification>) {
        let report = self.cache.apply_load(result);
        let notifications = if report.applied {
            report
                .failures
                .iter()
                .map(|(collection, _)| {
                    Notification::warning(format!(
                        "Failed to load {}. Check API URL and permissions.",
                        collection.label()
                    ))
                })
                .collect()
        } else {
            Vec::new()
        };
        (report, notifications)
    }

    pub async fn reload(&mut self) -> (LoadReport, Vec<Notification>) {
        let ticket = self.begin_load();
        let store = self.store();
        let result = LoadResult::fetch(store.as_ref(), ticket).await;
        self.apply_load(result)
    }

    // ------------------------------------------------------------------------
    // Create
    // ------------------------------------------------------------------------

    pub fn begin_create_task(
        &mut self,
        form: &TaskForm,
        epoch_millis: i64,
    ) -> Result<PendingMutation, MutationError> {
        form.validate()?;
        let task = form.clone().into_new_task(epoch_millis);
        self.begin_create(&task)
    }

    pub fn begin_create_project(&mut self, form: &ProjectForm) -> Result<PendingMutation, MutationError> {
        form.validate()?;
        self.begin_create(&form.clone().into_new_project())
    }

    pub fn begin_create_member(&mut self, form: &MemberForm) -> Result<PendingMutation, MutationError> {
        form.validate()?;
        self.begin_create(&form.clone().into_new_member())
    }

    fn begin_create<R: Record>(&mut self, record: &R) -> Result<PendingMutation, MutationError> {
        let data = to_payload(record)?;
        self.pending(
            MutationKind::Create,
            MutationAction::Create,
            R::COLLECTION,
            record.key(),
            data,
        )
    }

    // ------------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------------

    /// Apply `form` onto the cached task `task_no` and prepare the UPDATE.
    pub fn begin_update_task(
        &mut self,
        task_no: &str,
        form: &TaskForm,
    ) -> Result<PendingMutation, MutationError> {
        form.validate()?;
        let prior = self.existing::<Task>(task_no)?;
        self.begin_update(task_no, &form.apply_to(&prior))
    }

    pub fn begin_update_project(
        &mut self,
        project_name: &str,
        form: &ProjectForm,
    ) -> Result<PendingMutation, MutationError> {
        form.validate()?;
        let prior = self.existing::<Project>(project_name)?;
        self.begin_update(project_name, &form.apply_to(&prior))
    }

    pub fn begin_update_member(
        &mut self,
        full_name: &str,
        form: &MemberForm,
    ) -> Result<PendingMutation, MutationError> {
        form.validate()?;
        let prior = self.existing::<TeamMember>(full_name)?;
        self.begin_update(full_name, &form.apply_to(&prior))
    }

    /// The key column is fixed once a record exists; an UPDATE under another
    /// key would overwrite that other row.
    fn begin_update<R: Record>(&mut self, key: &str, record: &R) -> Result<PendingMutation, MutationError> {
        if record.key() != key {
            return Err(MutationError::Validation(ValidationError::InvalidValue {
                field: R::KEY_FIELD.to_string(),
                reason: format!("cannot change from '{}' to '{}'", key, record.key()),
            }));
        }
        let data = to_payload(record)?;
        self.pending(
            MutationKind::Update,
            MutationAction::Update,
            R::COLLECTION,
            key,
            data,
        )
    }

    fn existing<R: Record>(&self, key: &str) -> Result<R, MutationError> {
        self.snapshot()
            .find::<R>(key)
            .cloned()
            .ok_or_else(|| MutationError::NotFound {
                collection: R::COLLECTION,
                key: key.to_string(),
            })
    }

    // ------------------------------------------------------------------------
    // Move
    // ------------------------------------------------------------------------

    /// Move a card to `column`.
    ///
    /// Returns `None` when the task already has the column's status; nothing
    /// is sent in that case. Otherwise the cache shows the new status
    /// immediately and the UPDATE carries the full record.
    pub fn begin_move(
        &mut self,
        task_no: &str,
        column: BoardColumn,
    ) -> Result<Option<PendingMutation>, MutationError> {
        let target = column.status();
        let task = self.existing::<Task>(task_no)?;
        if task.task_status == target {
            debug!(task_no, column = column.column_id(), "card dropped on its own column");
            return Ok(None);
        }

        let from = task.task_status.clone();
        let mut moved = task;
        moved.task_status = target.clone();
        let data = to_payload(&moved)?;
        let pending = self.pending(
            MutationKind::Move {
                from,
                to: target.clone(),
            },
            MutationAction::Update,
            Collection::Tasks,
            task_no,
            data,
        )?;

        let patch = json!({ "TaskStatus": target.as_str() });
        if let Err(err) = self
            .cache
            .apply_local_patch::<Task>(|t| t.task_no == task_no, &patch)
        {
            warn!(task_no, error = %err, "optimistic move not applied");
        }
        Ok(Some(pending))
    }

    pub async fn run_move(
        &mut self,
        task_no: &str,
        column: BoardColumn,
    ) -> Result<MoveOutcome, MutationError> {
        match self.begin_move(task_no, column)? {
            None => Ok(MoveOutcome::Unchanged),
            Some(pending) => Ok(MoveOutcome::Moved(self.run(pending).await)),
        }
    }

    // ------------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------------

    /// Ask to delete the record `key`. Nothing is sent yet.
    pub fn request_delete<R: Record>(&self, key: &str) -> Result<PendingDelete, MutationError> {
        let record = self.existing::<R>(key)?;
        Ok(PendingDelete {
            collection: R::COLLECTION,
            key: key.to_string(),
            payload: record.key_payload(),
        })
    }

    pub fn confirm_delete(&mut self, token: PendingDelete) -> Result<PendingMutation, MutationError> {
        let PendingDelete {
            collection,
            key,
            payload,
        } = token;
        self.pending(MutationKind::Delete, MutationAction::Delete, collection, &key, payload)
    }

    pub fn cancel_delete(&self, token: PendingDelete) {
        debug!(collection = %token.collection, key = %token.key, "delete cancelled");
    }

    // ------------------------------------------------------------------------
    // Submit and complete
    // ------------------------------------------------------------------------

    /// Send a pending write. Uses only the store.
    pub async fn submit(store: &dyn RemoteStore, pending: &PendingMutation) -> MutationOutcome {
        debug!(
            action = %pending.request.action,
            sheet = %pending.request.sheet_name,
            key = %pending.key,
            sequence = pending.sequence,
            "submitting"
        );
        store.apply(&pending.request).await
    }

    /// Apply the outcome of a write to the cache.
    pub fn complete(&mut self, pending: PendingMutation, outcome: MutationOutcome) -> MutationReport {
        self.release(&pending);

        let terminal = if outcome.is_ok() {
            MutationPhase::Succeeded
        } else {
            MutationPhase::Failed
        };
        let phase = match pending.phase.advance(terminal) {
            Ok(phase) => phase,
            Err(err) => {
                warn!(error = %err, "completing a mutation that was not submitting");
                terminal
            }
        };

        let action = pending.request.action;
        let collection = pending.collection;
        let mut reload_scheduled = false;

        let notification = match (&pending.kind, &outcome) {
            (MutationKind::Create, Ok(_)) => {
                self.schedule_reload();
                reload_scheduled = true;
                Some(Notification::success("Item added successfully! Refreshing..."))
            }
            (MutationKind::Update, Ok(_)) => {
                self.patch_record(collection, &pending.key, &pending.request.data);
                Some(Notification::success(format!(
                    "{} updated successfully!",
                    record_label(collection)
                )))
            }
            (MutationKind::Move { .. }, Ok(_)) => {
                self.schedule_reload();
                reload_scheduled = true;
                None
            }
            (MutationKind::Move { from, to }, Err(_)) => {
                let revert = json!({ "TaskStatus": from.as_str() });
                let key = pending.key.as_str();
                if let Err(err) = self
                    .cache
                    .apply_local_patch::<Task>(|t| t.task_no == key && t.task_status == *to, &revert)
                {
                    warn!(task_no = key, error = %err, "failed to revert optimistic move");
                }
                self.schedule_reload();
                reload_scheduled = true;
                Some(failure_notice(action, collection))
            }
            (MutationKind::Delete, Ok(_)) => {
                self.schedule_reload();
                reload_scheduled = true;
                Some(Notification::info(format!(
                    "{} deleted successfully. Refreshing...",
                    record_label(collection)
                )))
            }
            (_, Err(_)) => Some(failure_notice(action, collection)),
        };

        match &outcome {
            Ok(_) => info!(%action, %collection, key = %pending.key, "mutation succeeded"),
            Err(err) => warn!(%action, %collection, key = %pending.key, error = %err, "mutation failed"),
        }

        MutationReport {
            action,
            collection,
            key: pending.key,
            phase,
            error: outcome.err(),
            reload_scheduled,
            notification,
        }
    }

    /// Submit and complete in one call.
    pub async fn run(&mut self, pending: PendingMutation) -> MutationReport {
        let store = self.store();
        let outcome = Self::submit(store.as_ref(), &pending).await;
        self.complete(pending, outcome)
    }

    fn patch_record(&mut self, collection: Collection, key: &str, data: &Value) {
        let patched = match collection {
            Collection::Tasks => self.cache.apply_local_patch::<Task>(|r| r.key() == key, data),
            Collection::Projects => self.cache.apply_local_patch::<Project>(|r| r.key() == key, data),
            Collection::TeamMembers => {
                self.cache.apply_local_patch::<TeamMember>(|r| r.key() == key, data)
            }
        };
        match patched {
            Ok(true) => {}
            Ok(false) => debug!(%collection, key, "updated record no longer cached"),
            Err(err) => warn!(%collection, key, error = %err, "failed to patch cached record"),
        }
    }

    // ------------------------------------------------------------------------
    // Generation
    // ------------------------------------------------------------------------

    /// Apply a finished generation run. A reload is scheduled whenever any
    /// task was sent to the store.
    pub fn complete_generation(&mut self, outcome: GenerationOutcome) -> GenerationReport {
        let GenerationOutcome {
            project_name,
            result,
        } = outcome;

        match result {
            Ok(saved) => {
                self.schedule_reload();
                let notification = if saved.failed == 0 {
                    Notification::success(format!(
                        "{} tasks generated for \"{}\"! Refreshing...",
                        saved.created, project_name
                    ))
                } else {
                    Notification::warning(format!(
                        "{} of {} generated tasks saved for \"{}\". Refreshing...",
                        saved.created, saved.requested, project_name
                    ))
                };
                GenerationReport {
                    project_name,
                    saved: Some(saved),
                    error: None,
                    reload_scheduled: true,
                    notification,
                }
            }
            Err(err) => {
                warn!(project = %project_name, error = %err, "task generation failed");
                let notification = match err {
                    LlmError::ProviderNotConfigured => Notification::error(ASSISTANT_UNAVAILABLE),
                    _ => Notification::error("Error generating tasks. Please try again."),
                };
                GenerationReport {
                    project_name,
                    saved: None,
                    error: Some(err),
                    reload_scheduled: false,
                    notification,
                }
            }
        }
    }

    /// Draft tasks for `project_name`, save them one by one and schedule a
    /// reload.
    pub async fn generate_tasks(
        &mut self,
        assistant: &TaskAssistant,
        project_name: &str,
        epoch_millis: i64,
    ) -> Result<GenerationReport, MutationError> {
        require_field("ProjectName", project_name)?;
        let store = self.store();
        let outcome = run_generation(
            store.as_ref(),
            assistant,
            project_name.trim().to_string(),
            self.member_names(),
            epoch_millis,
        )
        .await;
        Ok(self.complete_generation(outcome))
    }
}

impl std::fmt::Debug for MutationCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MutationCoordinator")
            .field("cache", &self.cache)
            .field("reloads", &self.reloads)
            .field("in_flight", &self.in_flight)
            .field("reload_delay", &self.reload_delay)
            .finish()
    }
}

fn to_payload<R: Record>(record: &R) -> Result<Value, MutationError> {
    serde_json::to_value(record).map_err(|e| {
        MutationError::Validation(ValidationError::InvalidValue {
            field: R::KEY_FIELD.to_string(),
            reason: e.to_string(),
        })
    })
}

fn record_label(collection: Collection) -> &'static str {
    match collection {
        Collection::Tasks => "Task",
        Collection::Projects => "Project",
        Collection::TeamMembers => "Team member",
    }
}

fn failure_notice(action: MutationAction, collection: Collection) -> Notification {
    Notification::error(format!("Operation failed: {} on {}.", action, collection))
}

// ============================================================================
// GENERATION AND SUGGESTION HELPERS
// ============================================================================

/// Milliseconds since the Unix epoch, for generated task numbers.
pub fn epoch_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Turn drafted tasks into task records: `T-<millis>-<i>`, status "To Do",
/// no due date, owners assigned round-robin from `member_names`.
pub fn build_generated_tasks(
    project_name: &str,
    generated: &[GeneratedTask],
    member_names: &[String],
    epoch_millis: i64,
) -> Vec<Task> {
    generated
        .iter()
        .enumerate()
        .map(|(index, draft)| {
            let owner = if member_names.is_empty() {
                String::new()
            } else {
                member_names[index % member_names.len()].clone()
            };
            Task::new(generated_task_no(epoch_millis, index), draft.task_name.clone())
                .with_project(project_name)
                .with_priority(draft.priority.clone())
                .with_status(TaskStatus::ToDo)
                .with_end_date("")
                .with_owner(owner)
        })
        .collect()
}

/// CREATE each task in order. A failed write is counted and skipped.
pub async fn save_generated_tasks(store: &dyn RemoteStore, tasks: &[Task]) -> GenerationSaved {
    let mut saved = GenerationSaved {
        requested: tasks.len(),
        ..GenerationSaved::default()
    };
    for task in tasks {
        match mutate(store, MutationAction::Create, task).await {
            Ok(_) => saved.created += 1,
            Err(err) => {
                warn!(task_no = %task.task_no, error = %err, "generated task not saved");
                saved.failed += 1;
            }
        }
    }
    saved
}

/// Ask the assistant for tasks and save them. Touches only the store and the
/// assistant, so it can run on a spawned task.
pub async fn run_generation(
    store: &dyn RemoteStore,
    assistant: &TaskAssistant,
    project_name: String,
    member_names: Vec<String>,
    epoch_millis: i64,
) -> GenerationOutcome {
    let result = match assistant.generate_tasks(&project_name).await {
        Ok(drafts) => {
            let tasks = build_generated_tasks(&project_name, &drafts, &member_names, epoch_millis);
            Ok(save_generated_tasks(store, &tasks).await)
        }
        Err(err) => Err(err),
    };
    GenerationOutcome {
        project_name,
        result,
    }
}

/// Suggested sub-tasks for the notes field of `task_name`.
pub async fn suggest_subtasks(assistant: &TaskAssistant, task_name: &str) -> Result<String, BoardError> {
    require_field("TaskName", task_name)?;
    Ok(assistant.suggest_subtasks(task_name.trim()).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::Priority;

    #[test]
    fn test_generated_tasks_round_robin_owners() {
        let drafts = vec![
            GeneratedTask {
                task_name: "Scope".to_string(),
                priority: Priority::High,
            },
            GeneratedTask {
                task_name: "Plan".to_string(),
                priority: Priority::Medium,
            },
            GeneratedTask {
                task_name: "Kickoff".to_string(),
                priority: Priority::Low,
            },
        ];
        let members = vec!["Ada".to_string(), "Linus".to_string()];
        let tasks = build_generated_tasks("Apollo", &drafts, &members, 42);

        let owners: Vec<&str> = tasks.iter().map(|t| t.task_owner.as_str()).collect();
        assert_eq!(owners, vec!["Ada", "Linus", "Ada"]);
        assert_eq!(tasks[2].task_no, "T-42-2");
        assert!(tasks.iter().all(|t| t.task_status == TaskStatus::ToDo));
        assert!(tasks.iter().all(|t| t.end_date.is_empty() && t.project == "Apollo"));
    }

    #[test]
    fn test_generated_tasks_without_members() {
        let drafts = vec![GeneratedTask {
            task_name: "Solo".to_string(),
            priority: Priority::Low,
        }];
        let tasks = build_generated_tasks("Apollo", &drafts, &[], 1);
        assert_eq!(tasks[0].task_owner, "");
    }

    #[test]
    fn test_failure_notice_names_action_and_sheet() {
        let notice = failure_notice(MutationAction::Update, Collection::Tasks);
        assert_eq!(notice.message, "Operation failed: UPDATE on Tasks.");
    }
}
