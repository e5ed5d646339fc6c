//! End-to-end key handling: keys in, events back through the channel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use taskboard_core::{BoardColumn, Collection, MutationAction, TaskStatus};
use taskboard_llm::TaskAssistant;
use taskboard_test_utils::fixtures::{generated_tasks_json, seeded_store};
use taskboard_test_utils::{count_mutations, MockStore, ScriptedTransport};
use taskboard_tui::config::TuiConfig;
use taskboard_tui::events::TuiEvent;
use taskboard_tui::nav::View;
use taskboard_tui::notifications::NotificationLevel;
use taskboard_tui::state::{App, EditForm};
use tokio::sync::mpsc;
use tokio::time::Instant;

const CONFIG: &str = r#"
store_endpoint = "https://sheets.example.com/exec"
request_timeout_ms = 5000
reload_delay_ms = 500
notification_ttl_ms = 3000
tick_interval_ms = 100
persistence_path = "/tmp/taskboard/state.json"
log_path = "/tmp/taskboard/taskboard.log"

[generation]
endpoint = "https://generation.example.com/v1"
initial_backoff_ms = 10
max_retries = 2
backoff_multiplier = 2
"#;

struct Harness {
    app: App,
    events: mpsc::Receiver<TuiEvent>,
}

impl Harness {
    async fn loaded(store: &MockStore, assistant: Option<TaskAssistant>) -> Self {
        let config = TuiConfig::from_toml(CONFIG).unwrap();
        config.validate().unwrap();
        let (tx, rx) = mpsc::channel(256);
        let app = App::new(config, Arc::new(store.clone()), assistant, tx);
        let mut harness = Self { app, events: rx };
        harness.app.start_load();
        harness.pump().await;
        assert!(!harness.app.loading);
        harness
    }

    fn key(&mut self, code: KeyCode) -> bool {
        self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(&mut self, c: char) -> bool {
        self.app
            .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(KeyCode::Char(c));
        }
    }

    /// Wait for the next background event and apply it.
    async fn pump(&mut self) {
        let event = tokio::time::timeout(Duration::from_secs(5), self.events.recv())
            .await
            .expect("background event")
            .expect("channel open");
        self.app.handle_event(event);
    }

    fn latest_message(&self) -> Option<String> {
        self.app.notifications.latest().map(|n| n.message.clone())
    }
}

fn assistant(transport: &ScriptedTransport) -> TaskAssistant {
    TaskAssistant::new(Arc::new(transport.clone()))
}

#[tokio::test]
async fn test_startup_load_fills_views() {
    let store = seeded_store();
    let harness = Harness::loaded(&store, None).await;

    assert_eq!(harness.app.snapshot().tasks.len(), 4);
    assert_eq!(harness.app.snapshot().members.len(), 2);
    assert_eq!(harness.app.snapshot().projects.len(), 2);
    assert!(harness.app.notifications.is_empty());
}

#[tokio::test]
async fn test_view_keys_and_quit() {
    let store = seeded_store();
    let mut harness = Harness::loaded(&store, None).await;

    harness.key(KeyCode::Char('3'));
    assert_eq!(harness.app.active_view, View::Table);
    harness.key(KeyCode::Tab);
    assert_eq!(harness.app.active_view, View::Projects);
    harness.key(KeyCode::BackTab);
    harness.key(KeyCode::BackTab);
    assert_eq!(harness.app.active_view, View::Board);
    assert!(harness.key(KeyCode::Char('q')));
}

#[tokio::test]
async fn test_board_card_move_then_reload_on_tick() {
    let store = seeded_store();
    let mut harness = Harness::loaded(&store, None).await;

    harness.key(KeyCode::Char('2'));
    assert_eq!(harness.app.selected_task_no().as_deref(), Some("T-1"));
    harness.key(KeyCode::Char('l'));

    assert_eq!(harness.app.board.column, BoardColumn::InProgress);
    assert_eq!(
        harness.app.snapshot().task("T-1").map(|t| t.task_status.clone()),
        Some(TaskStatus::InProgress)
    );
    assert_eq!(harness.app.selected_task_no().as_deref(), Some("T-1"));

    harness.pump().await;
    let updates = store.mutations();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].action, MutationAction::Update);
    assert_eq!(updates[0].data["TaskStatus"], json!("In Progress"));

    let deadline = harness.app.coordinator.reload_deadline().unwrap();
    let fetches = store.fetch_count();
    harness.app.on_tick(deadline - Duration::from_millis(1));
    assert!(!harness.app.loading);
    harness.app.on_tick(deadline);
    assert!(harness.app.loading);
    harness.pump().await;
    assert!(!harness.app.loading);
    assert_eq!(store.fetch_count(), fetches + 3);
    assert!(harness.app.coordinator.reload_deadline().is_none());
}

#[tokio::test]
async fn test_board_move_keys_outside_board_do_nothing() {
    let store = seeded_store();
    let mut harness = Harness::loaded(&store, None).await;
    harness.key(KeyCode::Char('3'));
    harness.key(KeyCode::Char('l'));
    assert_eq!(store.mutation_count(), 0);
    assert!(harness.app.coordinator.reload_deadline().is_none());
}

#[tokio::test]
async fn test_delete_waits_for_confirmation() {
    let store = seeded_store();
    let mut harness = Harness::loaded(&store, None).await;
    harness.key(KeyCode::Char('3'));

    harness.key(KeyCode::Char('d'));
    assert!(harness.app.pending_delete.is_some());
    harness.key(KeyCode::Char('n'));
    assert!(harness.app.pending_delete.is_none());
    assert_eq!(store.mutation_count(), 0);

    harness.key(KeyCode::Char('d'));
    harness.key(KeyCode::Char('y'));
    harness.pump().await;

    assert_eq!(store.mutations()[0].data, json!({"TaskNo": "T-1"}));
    assert_eq!(
        harness.latest_message().as_deref(),
        Some("Task deleted successfully. Refreshing...")
    );

    harness
        .app
        .on_tick(Instant::now() + Duration::from_millis(500));
    harness.pump().await;
    assert!(harness.app.snapshot().task("T-1").is_none());
    assert_eq!(harness.app.table_rows().len(), 3);
}

#[tokio::test]
async fn test_new_project_form_flow() {
    let store = seeded_store();
    let mut harness = Harness::loaded(&store, None).await;
    harness.key(KeyCode::Char('4'));
    harness.key(KeyCode::Char('n'));

    let title = harness.app.form.as_ref().map(|f| f.title());
    assert_eq!(title.as_deref(), Some("Add New Project"));

    harness.key(KeyCode::Enter);
    assert!(harness.app.form.is_some());
    let notice = harness.app.notifications.latest().cloned().unwrap();
    assert_eq!(notice.level, NotificationLevel::Error);
    assert_eq!(store.mutation_count(), 0);

    harness.type_text("Zephyr");
    harness.key(KeyCode::Enter);
    assert!(harness.app.form.is_none());
    harness.pump().await;

    let creates = store.mutations();
    assert_eq!(count_mutations(&store, MutationAction::Create), 1);
    assert_eq!(creates[0].sheet_name, Collection::Projects.sheet_name());
    assert_eq!(creates[0].data["ProjectName"], json!("Zephyr"));
    assert_eq!(
        harness.latest_message().as_deref(),
        Some("Item added successfully! Refreshing...")
    );
}

#[tokio::test]
async fn test_edit_form_cancel_sends_nothing() {
    let store = seeded_store();
    let mut harness = Harness::loaded(&store, None).await;
    harness.key(KeyCode::Char('5'));
    harness.key(KeyCode::Char('e'));
    assert!(matches!(
        harness.app.form.as_ref().map(|f| &f.form),
        Some(EditForm::Member(_))
    ));
    harness.type_text("x");
    harness.key(KeyCode::Esc);
    assert!(harness.app.form.is_none());
    assert_eq!(store.mutation_count(), 0);
}

#[tokio::test]
async fn test_suggestion_fills_notes_of_open_form() {
    let store = seeded_store();
    let transport = ScriptedTransport::new();
    transport.push_text("1. Outline\n2. Draft");
    let mut harness = Harness::loaded(&store, Some(assistant(&transport))).await;
    harness.key(KeyCode::Char('2'));

    harness.key(KeyCode::Char('e'));
    harness.ctrl('s');
    assert!(harness.app.suggesting);
    harness.pump().await;

    assert!(!harness.app.suggesting);
    let Some(EditForm::Task(form)) = harness.app.form.as_ref().map(|f| &f.form) else {
        panic!("task form should stay open");
    };
    assert_eq!(form.notes, "1. Outline\n2. Draft");
    assert_eq!(store.mutation_count(), 0);
}

#[tokio::test]
async fn test_suggestion_without_assistant_reports_unavailable() {
    let store = seeded_store();
    let mut harness = Harness::loaded(&store, None).await;
    harness.key(KeyCode::Char('2'));
    harness.key(KeyCode::Char('s'));

    assert!(harness.app.form.is_some());
    assert!(!harness.app.suggesting);
    let notice = harness.app.notifications.latest().cloned().unwrap();
    assert_eq!(notice.level, NotificationLevel::Error);
    assert!(notice.message.contains("not available"));
}

#[tokio::test]
async fn test_generate_from_projects_view() {
    let store = seeded_store();
    let transport = ScriptedTransport::new();
    transport.push_text(&generated_tasks_json(&["Scope", "Plan"]));
    let mut harness = Harness::loaded(&store, Some(assistant(&transport))).await;
    harness.key(KeyCode::Char('4'));

    harness.key(KeyCode::Char('g'));
    assert!(harness.app.generating);
    harness.pump().await;

    assert!(!harness.app.generating);
    assert_eq!(count_mutations(&store, MutationAction::Create), 2);
    assert_eq!(
        harness.latest_message().as_deref(),
        Some("2 tasks generated for \"Apollo\"! Refreshing...")
    );
    assert!(harness.app.coordinator.reload_deadline().is_some());
}

#[tokio::test]
async fn test_failed_sheet_keeps_previous_rows() {
    let store = seeded_store();
    let mut harness = Harness::loaded(&store, None).await;
    store.fail_fetch(
        Collection::TeamMembers,
        taskboard_core::StoreError::Transport {
            reason: "timeout".to_string(),
        },
    );

    harness.key(KeyCode::Char('r'));
    harness.pump().await;

    assert_eq!(harness.app.snapshot().members.len(), 2);
    assert_eq!(
        harness.latest_message().as_deref(),
        Some("Failed to load teammembers. Check API URL and permissions.")
    );
}
