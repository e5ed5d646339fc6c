//! Spreadsheet record types.
//!
//! Each record is one row of a sheet. Column names are PascalCase on the
//! wire. Columns this client does not model are carried in `extra` so that
//! writing a record back never drops them.

use crate::enums::{Collection, Priority, ProjectStatus, TaskStatus};
use crate::snapshot::Snapshot;
use crate::wire::lenient_string;
use crate::Date;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record type stored in one of the three sheets.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Sheet holding this record type.
    const COLLECTION: Collection;
    /// Wire name of the key column.
    const KEY_FIELD: &'static str;

    /// Value of the key column.
    fn key(&self) -> &str;

    fn rows(snapshot: &Snapshot) -> &[Self];

    fn rows_mut(snapshot: &mut Snapshot) -> &mut Vec<Self>;

    /// The minimal payload identifying this record for a DELETE.
    fn key_payload(&self) -> Value {
        let mut map = Map::new();
        map.insert(Self::KEY_FIELD.to_string(), Value::String(self.key().to_string()));
        Value::Object(map)
    }
}

// ============================================================================
// TASK
// ============================================================================

/// A task row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    #[serde(default, deserialize_with = "lenient_string")]
    pub task_no: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub task_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project: String,
    #[serde(default = "Priority::missing")]
    pub priority: Priority,
    #[serde(default = "TaskStatus::missing")]
    pub task_status: TaskStatus,
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub task_owner: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: String,
    /// Columns not modelled above, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// A new task with the given key and name, status "To Do".
    pub fn new(task_no: impl Into<String>, task_name: impl Into<String>) -> Self {
        Self {
            task_no: task_no.into(),
            task_name: task_name.into(),
            project: String::new(),
            priority: Priority::Medium,
            task_status: TaskStatus::ToDo,
            start_date: String::new(),
            end_date: String::new(),
            task_owner: String::new(),
            notes: String::new(),
            extra: Map::new(),
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.task_status = status;
        self
    }

    pub fn with_end_date(mut self, end_date: impl Into<String>) -> Self {
        self.end_date = end_date.into();
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.task_owner = owner.into();
        self
    }

    /// Calendar due date, if `EndDate` holds a parsable date.
    pub fn due_date(&self) -> Option<Date> {
        parse_sheet_date(&self.end_date)
    }

    pub fn start(&self) -> Option<Date> {
        parse_sheet_date(&self.start_date)
    }

    pub fn is_open(&self) -> bool {
        !self.task_status.is_done()
    }
}

impl Record for Task {
    const COLLECTION: Collection = Collection::Tasks;
    const KEY_FIELD: &'static str = "TaskNo";

    fn key(&self) -> &str {
        &self.task_no
    }

    fn rows(snapshot: &Snapshot) -> &[Self] {
        &snapshot.tasks
    }

    fn rows_mut(snapshot: &mut Snapshot) -> &mut Vec<Self> {
        &mut snapshot.tasks
    }
}

// ============================================================================
// PROJECT
// ============================================================================

/// A project row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub team_members: String,
    #[serde(default = "ProjectStatus::missing")]
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timeline: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    pub fn new(project_name: impl Into<String>, status: ProjectStatus) -> Self {
        Self {
            project_name: project_name.into(),
            description: String::new(),
            team_members: String::new(),
            status,
            timeline: String::new(),
            extra: Map::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::InProgress
    }

    pub fn is_completed(&self) -> bool {
        self.status == ProjectStatus::Completed
    }
}

impl Record for Project {
    const COLLECTION: Collection = Collection::Projects;
    const KEY_FIELD: &'static str = "ProjectName";

    fn key(&self) -> &str {
        &self.project_name
    }

    fn rows(snapshot: &Snapshot) -> &[Self] {
        &snapshot.projects
    }

    fn rows_mut(snapshot: &mut Snapshot) -> &mut Vec<Self> {
        &mut snapshot.projects
    }
}

// ============================================================================
// TEAM MEMBER
// ============================================================================

/// A team member row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamMember {
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TeamMember {
    pub fn new(full_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            role: role.into(),
            email: String::new(),
            extra: Map::new(),
        }
    }

    /// First character of the name, or `?` when blank.
    pub fn initial(&self) -> char {
        initial_of(&self.full_name)
    }
}

impl Record for TeamMember {
    const COLLECTION: Collection = Collection::TeamMembers;
    const KEY_FIELD: &'static str = "FullName";

    fn key(&self) -> &str {
        &self.full_name
    }

    fn rows(snapshot: &Snapshot) -> &[Self] {
        &snapshot.members
    }

    fn rows_mut(snapshot: &mut Snapshot) -> &mut Vec<Self> {
        &mut snapshot.members
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Parse a sheet date cell: `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_sheet_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = Date::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&chrono::Utc).date_naive())
}

/// First character of a display name, `?` for blank names.
pub fn initial_of(name: &str) -> char {
    name.trim().chars().next().unwrap_or('?')
}
