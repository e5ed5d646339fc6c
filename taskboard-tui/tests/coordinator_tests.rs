//! Mutation coordinator behavior against the mock store.

use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use taskboard_core::{
    BoardColumn, BoardError, BoardView, Collection, DashboardSummary, LlmError, MemberForm,
    MutationAction, MutationError, MutationPhase, Project, ProjectForm, Task, TaskForm,
    TaskStatus, TeamMember, ValidationError,
};
use taskboard_llm::TaskAssistant;
use taskboard_store::{LoadResult, RemoteStore};
use taskboard_test_utils::fixtures::{generated_tasks_json, sample_tasks, seeded_store};
use taskboard_test_utils::{assert_in_single_column, count_mutations, MockStore, ScriptedTransport};
use taskboard_tui::coordinator::{
    suggest_subtasks, MoveOutcome, MutationCoordinator, ASSISTANT_UNAVAILABLE,
};
use taskboard_tui::notifications::NotificationLevel;
use tokio::time::Instant;

const DELAY: Duration = Duration::from_millis(500);

async fn loaded(store: &MockStore) -> MutationCoordinator {
    let mut coordinator = MutationCoordinator::new(Arc::new(store.clone()), DELAY);
    let (report, notifications) = coordinator.reload().await;
    assert!(report.is_clean());
    assert!(notifications.is_empty());
    coordinator
}

fn assistant(transport: &ScriptedTransport) -> TaskAssistant {
    TaskAssistant::new(Arc::new(transport.clone()))
}

fn status_of(coordinator: &MutationCoordinator, task_no: &str) -> Option<TaskStatus> {
    coordinator
        .snapshot()
        .task(task_no)
        .map(|t| t.task_status.clone())
}

// ============================================================================
// CREATE
// ============================================================================

#[tokio::test]
async fn test_created_task_lands_in_one_column_after_reload() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;

    let form = TaskForm {
        task_no: "T-9".to_string(),
        task_name: "Draft roadmap".to_string(),
        ..TaskForm::blank()
    };
    let pending = coordinator.begin_create_task(&form, 1).unwrap();
    assert_eq!(pending.phase(), MutationPhase::Submitting);
    let report = coordinator.run(pending).await;

    assert!(report.succeeded());
    assert!(report.reload_scheduled);
    assert_eq!(
        report.notification.map(|n| n.message),
        Some("Item added successfully! Refreshing...".to_string())
    );
    assert!(coordinator.snapshot().task("T-9").is_none());

    coordinator.reload().await;
    assert_in_single_column(coordinator.snapshot(), "T-9", &TaskStatus::ToDo);
    assert_eq!(count_mutations(&store, MutationAction::Create), 1);
}

#[tokio::test]
async fn test_create_without_name_sends_nothing() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;

    let err = coordinator
        .begin_create_task(&TaskForm::blank(), 1)
        .unwrap_err();
    assert_eq!(
        err,
        MutationError::Validation(ValidationError::RequiredFieldMissing {
            field: "TaskName".to_string()
        })
    );
    assert_eq!(store.mutation_count(), 0);
    assert_eq!(coordinator.in_flight_count(), 0);
}

#[tokio::test]
async fn test_failed_create_leaves_cache_untouched() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    let before = coordinator.snapshot().clone();
    store.fail_next_mutation(taskboard_core::StoreError::Http {
        status: 500,
        body: "boom".to_string(),
    });

    let form = TaskForm {
        task_name: "Doomed".to_string(),
        ..TaskForm::blank()
    };
    let pending = coordinator.begin_create_task(&form, 7).unwrap();
    let report = coordinator.run(pending).await;

    assert!(!report.succeeded());
    assert!(!report.reload_scheduled);
    assert_eq!(coordinator.snapshot(), &before);
    let notice = report.notification.unwrap();
    assert_eq!(notice.level, NotificationLevel::Error);
    assert_eq!(notice.message, "Operation failed: CREATE on Tasks.");
}

// ============================================================================
// MOVE
// ============================================================================

#[tokio::test]
async fn test_move_to_done_sends_one_update() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;

    let outcome = coordinator.run_move("T-1", BoardColumn::Done).await.unwrap();
    let MoveOutcome::Moved(report) = outcome else {
        panic!("expected a move");
    };
    assert!(report.succeeded());
    assert!(report.reload_scheduled);
    assert!(report.notification.is_none());

    let updates = store.mutations();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].action, MutationAction::Update);
    assert_eq!(updates[0].sheet_name, "Tasks");
    assert_eq!(updates[0].data["TaskStatus"], json!("Done"));
    assert_eq!(updates[0].data["TaskName"], json!("Write brief"));
    assert_eq!(status_of(&coordinator, "T-1"), Some(TaskStatus::Done));
}

#[tokio::test]
async fn test_drop_on_same_column_sends_nothing() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;

    let outcome = coordinator
        .run_move("T-2", BoardColumn::InProgress)
        .await
        .unwrap();
    assert_eq!(outcome, MoveOutcome::Unchanged);
    assert_eq!(store.mutation_count(), 0);
    assert!(coordinator.reload_deadline().is_none());
}

#[tokio::test]
async fn test_failed_move_reverts_and_still_reloads() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    store.fail_next_mutation(taskboard_core::StoreError::Transport {
        reason: "offline".to_string(),
    });

    let pending = coordinator
        .begin_move("T-1", BoardColumn::Review)
        .unwrap()
        .unwrap();
    assert_eq!(status_of(&coordinator, "T-1"), Some(TaskStatus::Review));

    let report = coordinator.run(pending).await;
    assert!(!report.succeeded());
    assert!(report.reload_scheduled);
    assert_eq!(status_of(&coordinator, "T-1"), Some(TaskStatus::ToDo));
    assert_eq!(
        report.notification.map(|n| n.message),
        Some("Operation failed: UPDATE on Tasks.".to_string())
    );
}

#[tokio::test]
async fn test_move_of_unknown_task_is_not_found() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    let err = coordinator
        .begin_move("T-404", BoardColumn::Done)
        .unwrap_err();
    assert!(matches!(err, MutationError::NotFound { collection: Collection::Tasks, .. }));
}

#[tokio::test]
async fn test_completing_last_todo_drops_new_count_by_one() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();

    let before = DashboardSummary::compute(coordinator.snapshot(), today);
    assert_eq!(before, DashboardSummary::compute(coordinator.snapshot(), today));
    assert_eq!(before.new_tasks, 1);

    coordinator.run_move("T-1", BoardColumn::Done).await.unwrap();
    coordinator.reload().await;

    let after = DashboardSummary::compute(coordinator.snapshot(), today);
    assert_eq!(before.new_tasks - after.new_tasks, 1);
}

// ============================================================================
// UPDATE
// ============================================================================

#[tokio::test]
async fn test_unchanged_edit_round_trips_every_column() {
    let store = MockStore::new();
    store.seed_rows(
        Collection::Tasks,
        vec![json!({
            "TaskNo": "T-7",
            "TaskName": "Review copy",
            "Project": "Apollo",
            "Priority": "Low",
            "TaskStatus": "Review",
            "StartDate": "2024-06-01",
            "EndDate": "2024-06-20",
            "TaskOwner": "Ada",
            "Notes": "tone",
            "TaskType": "Writing",
            "Sprint": 4
        })],
    );
    let mut coordinator = loaded(&store).await;
    let before = coordinator.snapshot().task("T-7").cloned().unwrap();

    let form = TaskForm::from_task(&before);
    let pending = coordinator.begin_update_task("T-7", &form).unwrap();
    let report = coordinator.run(pending).await;
    assert!(report.succeeded());
    assert!(!report.reload_scheduled);
    assert_eq!(
        report.notification.map(|n| n.message),
        Some("Task updated successfully!".to_string())
    );
    assert_eq!(store.mutations()[0].data["Sprint"], json!(4));

    coordinator.reload().await;
    let after: &Task = coordinator.snapshot().task("T-7").unwrap();
    assert_eq!(after, &before);
}

#[tokio::test]
async fn test_off_label_status_stays_off_board_and_round_trips() {
    let row = json!({
        "TaskNo": "T-8",
        "TaskName": "Archive notes",
        "Project": "Apollo",
        "Priority": "high",
        "TaskStatus": "done",
        "StartDate": "",
        "EndDate": "",
        "TaskOwner": "Ada",
        "Notes": ""
    });
    let store = MockStore::new();
    store.seed_rows(Collection::Tasks, vec![row.clone()]);
    let mut coordinator = loaded(&store).await;

    let board = BoardView::build(&coordinator.snapshot().tasks);
    assert_eq!(board.occurrences("T-8"), 0);
    assert_eq!(board.unplaced.len(), 1);
    let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
    let summary = DashboardSummary::compute(coordinator.snapshot(), today);
    assert_eq!(summary.critical_tasks, 0);
    assert_eq!(summary.new_tasks, 0);

    let prior = coordinator.snapshot().task("T-8").cloned().unwrap();
    let pending = coordinator
        .begin_update_task("T-8", &TaskForm::from_task(&prior))
        .unwrap();
    assert!(coordinator.run(pending).await.succeeded());

    assert_eq!(store.mutations()[0].data, row);
    assert_eq!(store.rows(Collection::Tasks), vec![row]);
}

#[tokio::test]
async fn test_edit_cannot_move_record_to_another_key() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    let rows_before = store.rows(Collection::Tasks);

    let prior = coordinator.snapshot().task("T-1").cloned().unwrap();
    let mut form = TaskForm::from_task(&prior);
    form.task_no = "T-2".to_string();
    let err = coordinator.begin_update_task("T-1", &form).unwrap_err();
    assert!(matches!(
        err,
        MutationError::Validation(ValidationError::InvalidValue { ref field, .. }) if field == "TaskNo"
    ));

    let project: Project = coordinator.snapshot().project("Apollo").cloned().unwrap();
    let mut form = ProjectForm::from_project(&project);
    form.project_name = "Gemini".to_string();
    assert!(matches!(
        coordinator.begin_update_project("Apollo", &form),
        Err(MutationError::Validation(ValidationError::InvalidValue { .. }))
    ));

    let member: TeamMember = coordinator.snapshot().member("Ada Lovelace").cloned().unwrap();
    let mut form = MemberForm::from_member(&member);
    form.full_name = "Linus Torvalds".to_string();
    assert!(matches!(
        coordinator.begin_update_member("Ada Lovelace", &form),
        Err(MutationError::Validation(ValidationError::InvalidValue { .. }))
    ));

    assert_eq!(store.mutation_count(), 0);
    assert_eq!(coordinator.in_flight_count(), 0);
    assert_eq!(store.rows(Collection::Tasks), rows_before);
    let keys: Vec<&str> = coordinator
        .snapshot()
        .tasks
        .iter()
        .map(|t| t.task_no.as_str())
        .collect();
    assert_eq!(keys, vec!["T-1", "T-2", "T-3", "T-4"]);
}

#[tokio::test]
async fn test_update_patches_cache_in_place() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    let prior = coordinator.snapshot().task("T-3").cloned().unwrap();

    let mut form = TaskForm::from_task(&prior);
    form.notes = "check tone".to_string();
    let pending = coordinator.begin_update_task("T-3", &form).unwrap();
    coordinator.run(pending).await;

    let patched = coordinator.snapshot().task("T-3").unwrap();
    assert_eq!(patched.notes, "check tone");
    assert_eq!(patched.task_status, TaskStatus::Review);
    assert!(coordinator.reload_deadline().is_none());
}

#[tokio::test]
async fn test_second_change_to_same_record_conflicts_until_complete() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    let prior = coordinator.snapshot().task("T-2").cloned().unwrap();

    let pending = coordinator
        .begin_update_task("T-2", &TaskForm::from_task(&prior))
        .unwrap();
    assert!(coordinator.is_in_flight(Collection::Tasks, "T-2"));

    let err = coordinator.begin_move("T-2", BoardColumn::Done).unwrap_err();
    assert_eq!(
        err,
        MutationError::Conflict {
            collection: Collection::Tasks,
            key: "T-2".to_string()
        }
    );
    assert_eq!(status_of(&coordinator, "T-2"), Some(TaskStatus::InProgress));

    let store_handle = coordinator.store();
    let outcome = MutationCoordinator::submit(store_handle.as_ref(), &pending).await;
    coordinator.complete(pending, outcome);
    assert_eq!(coordinator.in_flight_count(), 0);
    assert!(coordinator.begin_move("T-2", BoardColumn::Done).is_ok());
}

// ============================================================================
// DELETE
// ============================================================================

#[tokio::test]
async fn test_delete_needs_confirmation() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;

    let token = coordinator.request_delete::<Task>("T-3").unwrap();
    coordinator.cancel_delete(token);
    assert_eq!(store.mutation_count(), 0);
    assert!(coordinator.snapshot().task("T-3").is_some());

    let token = coordinator.request_delete::<Task>("T-3").unwrap();
    let pending = coordinator.confirm_delete(token).unwrap();
    let report = coordinator.run(pending).await;

    assert!(report.succeeded());
    let notice = report.notification.unwrap();
    assert_eq!(notice.level, NotificationLevel::Info);
    assert_eq!(notice.message, "Task deleted successfully. Refreshing...");
    assert_eq!(store.mutations()[0].data, json!({"TaskNo": "T-3"}));

    coordinator.reload().await;
    assert!(coordinator.snapshot().task("T-3").is_none());
}

#[tokio::test]
async fn test_failed_delete_keeps_record() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    store.fail_next_mutation(taskboard_core::StoreError::Application {
        message: "locked".to_string(),
    });

    let token = coordinator.request_delete::<Task>("T-3").unwrap();
    let pending = coordinator.confirm_delete(token).unwrap();
    let report = coordinator.run(pending).await;

    assert!(!report.succeeded());
    assert!(!report.reload_scheduled);
    assert!(coordinator.snapshot().task("T-3").is_some());
    assert_eq!(
        report.notification.map(|n| n.message),
        Some("Operation failed: DELETE on Tasks.".to_string())
    );
}

// ============================================================================
// LOADS
// ============================================================================

#[tokio::test]
async fn test_older_load_is_discarded() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    let handle: Arc<dyn RemoteStore> = coordinator.store();

    let older = coordinator.begin_load();
    let newer = coordinator.begin_load();

    let newer_result = LoadResult::fetch(handle.as_ref(), newer).await;
    let (report, _) = coordinator.apply_load(newer_result);
    assert!(report.applied);

    store.seed(Collection::Tasks, &sample_tasks()[..1]);
    let older_result = LoadResult::fetch(handle.as_ref(), older).await;
    let (report, notifications) = coordinator.apply_load(older_result);

    assert!(!report.applied);
    assert!(notifications.is_empty());
    assert_eq!(coordinator.snapshot().tasks.len(), 4);
}

#[tokio::test]
async fn test_failed_collection_keeps_rows_and_warns() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    store.fail_fetch(
        Collection::Projects,
        taskboard_core::StoreError::Http {
            status: 403,
            body: "denied".to_string(),
        },
    );

    let (report, notifications) = coordinator.reload().await;
    assert!(report.applied);
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].level, NotificationLevel::Warning);
    assert_eq!(
        notifications[0].message,
        "Failed to load projects. Check API URL and permissions."
    );
    assert_eq!(coordinator.snapshot().projects.len(), 2);
    assert!(coordinator.cache().is_stale(Collection::Projects));
}

// ============================================================================
// RELOAD TIMING
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_reload_fires_after_delay_and_coalesces() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    let start = Instant::now();

    let form = TaskForm {
        task_name: "First".to_string(),
        task_no: "T-10".to_string(),
        ..TaskForm::blank()
    };
    let pending = coordinator.begin_create_task(&form, 1).unwrap();
    coordinator.run(pending).await;
    assert_eq!(coordinator.reload_deadline(), Some(start + DELAY));

    tokio::time::advance(Duration::from_millis(300)).await;
    let form = TaskForm {
        task_name: "Second".to_string(),
        task_no: "T-11".to_string(),
        ..TaskForm::blank()
    };
    let pending = coordinator.begin_create_task(&form, 2).unwrap();
    coordinator.run(pending).await;

    let deadline = start + Duration::from_millis(800);
    assert_eq!(coordinator.reload_deadline(), Some(deadline));
    assert!(!coordinator.take_due_reload(start + DELAY));
    assert!(coordinator.take_due_reload(deadline));
    assert!(!coordinator.take_due_reload(deadline));
}

// ============================================================================
// ASSISTANT
// ============================================================================

#[tokio::test]
async fn test_generation_creates_each_task_and_schedules_reload() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    let transport = ScriptedTransport::new();
    transport.push_text(&generated_tasks_json(&["Scope", "Plan", "Kickoff"]));

    let report = coordinator
        .generate_tasks(&assistant(&transport), "Apollo", 42)
        .await
        .unwrap();

    let saved = report.saved.unwrap();
    assert_eq!((saved.requested, saved.created, saved.failed), (3, 3, 0));
    assert!(report.reload_scheduled);
    assert_eq!(report.notification.level, NotificationLevel::Success);
    assert_eq!(
        report.notification.message,
        "3 tasks generated for \"Apollo\"! Refreshing..."
    );

    let creates = store.mutations();
    assert_eq!(creates.len(), 3);
    assert_eq!(creates[0].data["TaskNo"], json!("T-42-0"));
    assert_eq!(creates[2].data["TaskNo"], json!("T-42-2"));
    let owners: Vec<&str> = creates
        .iter()
        .filter_map(|m| m.data["TaskOwner"].as_str())
        .collect();
    assert_eq!(owners, vec!["Ada Lovelace", "Linus Torvalds", "Ada Lovelace"]);
    assert!(creates.iter().all(|m| m.data["TaskStatus"] == json!("To Do")));
}

#[tokio::test]
async fn test_generation_counts_individual_failures() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    let transport = ScriptedTransport::new();
    transport.push_text(&generated_tasks_json(&["Scope", "Plan", "Kickoff"]));
    store.fail_next_mutation(taskboard_core::StoreError::Transport {
        reason: "flaky".to_string(),
    });

    let report = coordinator
        .generate_tasks(&assistant(&transport), "Apollo", 5)
        .await
        .unwrap();

    let saved = report.saved.unwrap();
    assert_eq!((saved.created, saved.failed), (2, 1));
    assert!(report.reload_scheduled);
    assert_eq!(report.notification.level, NotificationLevel::Warning);
    assert_eq!(store.mutation_count(), 3);
}

#[tokio::test]
async fn test_generation_requires_project_name() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    let transport = ScriptedTransport::new();

    let err = coordinator
        .generate_tasks(&assistant(&transport), "   ", 1)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        MutationError::Validation(ValidationError::RequiredFieldMissing { .. })
    ));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_generation_without_key_reports_unavailable() {
    let store = seeded_store();
    let mut coordinator = loaded(&store).await;
    let transport = ScriptedTransport::new();
    transport.push_error(LlmError::ProviderNotConfigured);

    let report = coordinator
        .generate_tasks(&assistant(&transport), "Apollo", 1)
        .await
        .unwrap();
    assert_eq!(report.error, Some(LlmError::ProviderNotConfigured));
    assert_eq!(report.notification.message, ASSISTANT_UNAVAILABLE);
    assert!(!report.reload_scheduled);
    assert_eq!(store.mutation_count(), 0);
}

#[tokio::test]
async fn test_suggest_subtasks_returns_text() {
    let transport = ScriptedTransport::new();
    transport.push_text("1. Outline\n2. Draft\n3. Edit");
    let text = suggest_subtasks(&assistant(&transport), "Write brief")
        .await
        .unwrap();
    assert_eq!(text, "1. Outline\n2. Draft\n3. Edit");

    let err = suggest_subtasks(&assistant(&transport), "").await.unwrap_err();
    assert!(matches!(err, BoardError::Validation(_)));
    assert_eq!(transport.request_count(), 1);
}
