//! Full-frame rendering against ratatui's in-memory backend.

use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use taskboard_core::{Collection, Task, TaskStatus};
use taskboard_test_utils::fixtures::{sample_members, sample_projects, sample_tasks, seeded_store};
use taskboard_test_utils::MockStore;
use taskboard_tui::config::TuiConfig;
use taskboard_tui::nav::View;
use taskboard_tui::state::App;
use taskboard_tui::views::render_view;
use tokio::sync::mpsc;

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

async fn loaded_app(store: &MockStore) -> App {
    let config = TuiConfig::from_toml(CONFIG).unwrap();
    let (tx, mut rx) = mpsc::channel(16);
    let mut app = App::new(config, Arc::new(store.clone()), None, tx);
    app.start_load();
    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();
    app.handle_event(event);
    assert!(!app.loading);
    app
}

fn store_with_blocked_task() -> MockStore {
    let store = MockStore::new();
    let mut tasks = sample_tasks();
    tasks.push(Task::new("T-5", "Wait on vendor").with_status(TaskStatus::parse("Blocked")));
    store.seed(Collection::Tasks, &tasks);
    store.seed(Collection::Projects, &sample_projects());
    store.seed(Collection::TeamMembers, &sample_members());
    store
}

/// Draw one frame of `view` and return the screen as text, one line per row.
fn draw(app: &mut App, view: View) -> String {
    app.active_view = view;
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| render_view(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer.get(x, y).symbol());
        }
        screen.push('\n');
    }
    screen
}

#[tokio::test]
async fn test_board_lists_columns_and_off_board_tasks() {
    let mut app = loaded_app(&store_with_blocked_task()).await;
    let screen = draw(&mut app, View::Board);

    assert!(screen.contains("To Do (1)"));
    assert!(screen.contains("In Progress (1)"));
    assert!(screen.contains("Review (1)"));
    assert!(screen.contains("Done (1)"));
    assert!(screen.contains("Write brief"));
    assert!(screen.contains("Not on the board: T-5 (Blocked)"));
}

#[tokio::test]
async fn test_board_without_stray_status_has_no_notice() {
    let mut app = loaded_app(&seeded_store()).await;
    let screen = draw(&mut app, View::Board);
    assert!(!screen.contains("Not on the board"));
}

#[tokio::test]
async fn test_table_shows_every_task_with_raw_status() {
    let mut app = loaded_app(&store_with_blocked_task()).await;
    let screen = draw(&mut app, View::Table);

    assert!(screen.contains("Tasks (5 of 5)"));
    assert!(screen.contains("Task No"));
    assert!(screen.contains("Wait on vendor"));
    assert!(screen.contains("Blocked"));
    assert!(screen.contains("Project: All"));
}

#[tokio::test]
async fn test_dashboard_shows_counts_and_agenda() {
    let mut app = loaded_app(&store_with_blocked_task()).await;
    let screen = draw(&mut app, View::Dashboard);

    assert!(screen.contains("Today's Tasks"));
    assert!(screen.contains("Critical"));
    assert!(screen.contains("Active Projects"));
    assert!(screen.contains("Today's Agenda"));
    assert!(screen.contains("Write brief"));
}

#[tokio::test]
async fn test_projects_view_shows_full_gauge_for_completed() {
    let mut app = loaded_app(&seeded_store()).await;
    app.projects.selected = 1;
    let screen = draw(&mut app, View::Projects);

    assert!(screen.contains("Projects (2)"));
    assert!(screen.contains("Gemini  100%"));
}

#[tokio::test]
async fn test_empty_store_renders_every_view() {
    let mut app = loaded_app(&MockStore::new()).await;
    assert!(app.snapshot().tasks.is_empty());

    let board = draw(&mut app, View::Board);
    assert!(board.contains("To Do (0)"));
    assert!(board.contains("Done (0)"));

    let table = draw(&mut app, View::Table);
    assert!(table.contains("Tasks (0 of 0)"));

    let dashboard = draw(&mut app, View::Dashboard);
    assert!(dashboard.contains("Today's Agenda (none)"));

    let projects = draw(&mut app, View::Projects);
    assert!(projects.contains("Projects (0)"));

    let team = draw(&mut app, View::Team);
    assert!(!team.is_empty());
}
