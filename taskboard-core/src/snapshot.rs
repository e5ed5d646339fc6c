//! Snapshot of the three collections and the tagged fetch result.

use crate::entities::{Project, Record, Task, TeamMember};
use crate::error::StoreError;

/// The full in-memory copy of all three collections at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub members: Vec<TeamMember>,
}

impl Snapshot {
    pub fn new(tasks: Vec<Task>, projects: Vec<Project>, members: Vec<TeamMember>) -> Self {
        Self {
            tasks,
            projects,
            members,
        }
    }

    pub fn task(&self, task_no: &str) -> Option<&Task> {
        self.find::<Task>(task_no)
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.find::<Project>(name)
    }

    pub fn member(&self, full_name: &str) -> Option<&TeamMember> {
        self.find::<TeamMember>(full_name)
    }

    /// First record of type `R` whose key equals `key`.
    pub fn find<R: Record>(&self, key: &str) -> Option<&R> {
        R::rows(self).iter().find(|r| r.key() == key)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.projects.is_empty() && self.members.is_empty()
    }
}

/// Result of reading one collection.
///
/// Keeps "the sheet is empty" (`Loaded(vec![])`) distinct from "the read
/// failed" (`Failed`).
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<R> {
    Loaded(Vec<R>),
    Failed(StoreError),
}

impl<R> FetchOutcome<R> {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    pub fn rows(&self) -> Option<&[R]> {
        match self {
            FetchOutcome::Loaded(rows) => Some(rows),
            FetchOutcome::Failed(_) => None,
        }
    }

    pub fn into_rows(self) -> Option<Vec<R>> {
        match self {
            FetchOutcome::Loaded(rows) => Some(rows),
            FetchOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&StoreError> {
        match self {
            FetchOutcome::Loaded(_) => None,
            FetchOutcome::Failed(err) => Some(err),
        }
    }
}

impl<R> From<Result<Vec<R>, StoreError>> for FetchOutcome<R> {
    fn from(result: Result<Vec<R>, StoreError>) -> Self {
        match result {
            Ok(rows) => FetchOutcome::Loaded(rows),
            Err(err) => FetchOutcome::Failed(err),
        }
    }
}
