//! Taskboard Core - Record Types and View Models
//!
//! Pure data structures shared by every other crate: the three spreadsheet
//! record types, their enumerations, the snapshot the cache holds, and the
//! read-only view models derived from it. No I/O lives here.

pub mod board;
pub mod dashboard;
pub mod entities;
pub mod enums;
pub mod error;
pub mod forms;
pub mod snapshot;
mod wire;

pub use board::{BoardColumnView, BoardView, FilterOptions, TableFilter};
pub use dashboard::{DashboardList, DashboardSummary, AGENDA_LIMIT};
pub use entities::{Project, Record, Task, TeamMember};
pub use enums::{BoardColumn, Collection, MutationAction, MutationPhase, Priority, ProjectStatus, TaskStatus};
pub use error::{
    BoardError, BoardResult, LlmError, MutationError, StoreError, ValidationError,
};
pub use forms::{FormFields, MemberForm, ProjectForm, TaskForm};
pub use snapshot::{FetchOutcome, Snapshot};

/// Calendar date used by the dashboard for "today" comparisons.
pub type Date = chrono::NaiveDate;

/// Build a caller-generated task number of the form `T-<millis>-<index>`.
pub fn generated_task_no(epoch_millis: i64, index: usize) -> String {
    format!("T-{}-{}", epoch_millis, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_task_no_format() {
        assert_eq!(generated_task_no(1_700_000_000_123, 2), "T-1700000000123-2");
    }
}
