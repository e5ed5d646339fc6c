//! Taskboard Test Utilities
//!
//! Shared test infrastructure for the taskboard workspace:
//! - Proptest generators for the record types
//! - Mock store and scripted generation transport
//! - Fixtures for a small seeded board

// Re-export mocks from their source crates
pub use taskboard_llm::ScriptedTransport;
pub use taskboard_store::MockStore;

pub use taskboard_core::{
    BoardColumn, BoardView, Collection, MutationAction, Priority, Project, ProjectStatus, Record,
    Snapshot, StoreError, Task, TaskStatus, TeamMember,
};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{json, Map, Value};

    /// Any of the four board statuses.
    pub fn arb_known_status() -> impl Strategy<Value = TaskStatus> {
        prop_oneof![
            Just(TaskStatus::ToDo),
            Just(TaskStatus::InProgress),
            Just(TaskStatus::Review),
            Just(TaskStatus::Done),
        ]
    }

    /// A known status or a free-form label the board does not know.
    pub fn arb_task_status() -> impl Strategy<Value = TaskStatus> {
        prop_oneof![
            4 => arb_known_status(),
            1 => "[A-Z][a-z]{2,10}".prop_map(|s| TaskStatus::parse(&s)),
        ]
    }

    pub fn arb_priority() -> impl Strategy<Value = Priority> {
        prop_oneof![
            Just(Priority::High),
            Just(Priority::Medium),
            Just(Priority::Low),
        ]
    }

    pub fn arb_board_column() -> impl Strategy<Value = BoardColumn> {
        prop::sample::select(BoardColumn::ALL.to_vec())
    }

    /// A task with a unique-looking number and a few extra columns.
    pub fn arb_task() -> impl Strategy<Value = Task> {
        (
            "T-[0-9]{1,6}",
            "[a-zA-Z0-9 ]{1,40}",
            "[A-Z][a-z]{2,12}",
            arb_priority(),
            arb_task_status(),
            prop::option::of("2024-0[1-9]-[12][0-9]"),
            "[A-Z][a-z]{1,8}",
            prop::collection::btree_map("Col[A-Z]{1,3}", "[a-z0-9]{0,8}", 0..3),
        )
            .prop_map(
                |(task_no, task_name, project, priority, status, end_date, owner, extra)| {
                    let mut task = Task::new(task_no, task_name)
                        .with_project(project)
                        .with_priority(priority)
                        .with_status(status)
                        .with_end_date(end_date.unwrap_or_default())
                        .with_owner(owner);
                    task.extra = extra
                        .into_iter()
                        .map(|(k, v)| (k, Value::String(v)))
                        .collect::<Map<String, Value>>();
                    task
                },
            )
    }

    /// Tasks whose numbers are distinct.
    pub fn arb_task_list(max: usize) -> impl Strategy<Value = Vec<Task>> {
        prop::collection::vec(arb_task(), 0..max).prop_map(|tasks| {
            tasks
                .into_iter()
                .enumerate()
                .map(|(i, mut t)| {
                    t.task_no = format!("T-{}", i);
                    t
                })
                .collect()
        })
    }

    /// A raw task row as the store sends it: numbers where strings are
    /// expected and columns this client never models.
    pub fn arb_task_row() -> impl Strategy<Value = Value> {
        (0u32..100_000, "[a-zA-Z ]{1,30}", arb_known_status(), any::<u8>()).prop_map(
            |(number, name, status, sprint)| {
                json!({
                    "TaskNo": number,
                    "TaskName": name,
                    "Project": "Apollo",
                    "Priority": "Medium",
                    "TaskStatus": status.as_str(),
                    "EndDate": "",
                    "TaskOwner": "Ada",
                    "Sprint": sprint,
                })
            },
        )
    }

    pub fn arb_project() -> impl Strategy<Value = Project> {
        (
            "[A-Z][a-z]{2,12}",
            prop_oneof![Just(ProjectStatus::InProgress), Just(ProjectStatus::Completed)],
            "[a-zA-Z ]{0,60}",
        )
            .prop_map(|(name, status, description)| {
                let mut project = Project::new(name, status);
                project.description = description;
                project
            })
    }

    pub fn arb_member() -> impl Strategy<Value = TeamMember> {
        ("[A-Z][a-z]{2,10} [A-Z][a-z]{2,10}", "[A-Z][a-z]{3,12}").prop_map(|(name, role)| {
            let mut member = TeamMember::new(name, role);
            member.email = format!("{}@example.com", member.initial().to_ascii_lowercase());
            member
        })
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub mod fixtures {
    use super::*;

    pub fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("T-1", "Write brief")
                .with_project("Apollo")
                .with_priority(Priority::High)
                .with_owner("Ada Lovelace"),
            Task::new("T-2", "Build prototype")
                .with_project("Apollo")
                .with_status(TaskStatus::InProgress)
                .with_owner("Linus Torvalds"),
            Task::new("T-3", "Review copy")
                .with_project("Gemini")
                .with_priority(Priority::Low)
                .with_status(TaskStatus::Review),
            Task::new("T-4", "Launch")
                .with_project("Gemini")
                .with_status(TaskStatus::Done)
                .with_owner("Ada Lovelace"),
        ]
    }

    pub fn sample_projects() -> Vec<Project> {
        vec![
            Project::new("Apollo", ProjectStatus::InProgress),
            Project::new("Gemini", ProjectStatus::Completed),
        ]
    }

    pub fn sample_members() -> Vec<TeamMember> {
        vec![
            TeamMember::new("Ada Lovelace", "Lead"),
            TeamMember::new("Linus Torvalds", "Engineer"),
        ]
    }

    pub fn sample_snapshot() -> Snapshot {
        Snapshot::new(sample_tasks(), sample_projects(), sample_members())
    }

    /// A mock store holding the sample board.
    pub fn seeded_store() -> MockStore {
        let store = MockStore::new();
        store.seed(Collection::Tasks, &sample_tasks());
        store.seed(Collection::Projects, &sample_projects());
        store.seed(Collection::TeamMembers, &sample_members());
        store
    }

    /// The JSON text a generation service returns for `names`, all "Medium".
    pub fn generated_tasks_json(names: &[&str]) -> String {
        let items: Vec<serde_json::Value> = names
            .iter()
            .map(|n| serde_json::json!({"taskName": n, "priority": "Medium"}))
            .collect();
        serde_json::Value::Array(items).to_string()
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that `task_no` sits in exactly one board column, the one for
/// `status`.
pub fn assert_in_single_column(snapshot: &Snapshot, task_no: &str, status: &TaskStatus) {
    let board = BoardView::build(&snapshot.tasks);
    assert_eq!(
        board.occurrences(task_no),
        1,
        "{} should appear in exactly one column",
        task_no
    );
    let expected = BoardColumn::for_status(status);
    assert_eq!(board.position_of(task_no).map(|(c, _)| c), expected);
}

/// Count of recorded writes with `action`.
pub fn count_mutations(store: &MockStore, action: MutationAction) -> usize {
    store
        .mutations()
        .iter()
        .filter(|m| m.action == action)
        .count()
}
