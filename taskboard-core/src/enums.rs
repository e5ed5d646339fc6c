//! Enum types for taskboard records

use crate::error::MutationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// SHEET-LABELLED ENUMS
// ============================================================================

/// Declares an enum whose variants map to fixed sheet labels, with an
/// `Unrecognized` variant that keeps any other cell value verbatim.
macro_rules! sheet_label_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A cell value outside the known labels, kept as written.
            Unrecognized(String),
        }

        impl $name {
            /// All known variants, in sheet order.
            pub const KNOWN: &'static [$name] = &[$($name::$variant,)+];

            /// The label written to the sheet.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Unrecognized(raw) => raw.as_str(),
                }
            }

            /// Parse a cell value. Only the exact label matches; any other
            /// spelling is kept byte for byte as `Unrecognized`.
            pub fn parse(raw: &str) -> Self {
                match raw {
                    $($label => $name::$variant,)+
                    _ => $name::Unrecognized(raw.to_string()),
                }
            }

            /// Whether the value is one of the known labels.
            pub fn is_recognized(&self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }

            fn blank() -> Self {
                $name::Unrecognized(String::new())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::parse(s))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = crate::wire::lenient_string(deserializer)?;
                Ok(Self::parse(&raw))
            }
        }
    };
}

sheet_label_enum! {
    /// Workflow status of a task. Board columns exist only for the four
    /// known values.
    pub enum TaskStatus {
        ToDo => "To Do",
        InProgress => "In Progress",
        Review => "Review",
        Done => "Done",
    }
}

impl TaskStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }

    /// Value used when a record carries no status column at all.
    pub(crate) fn missing() -> Self {
        Self::blank()
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::ToDo
    }
}

sheet_label_enum! {
    /// Task priority.
    pub enum Priority {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

impl Priority {
    pub(crate) fn missing() -> Self {
        Self::blank()
    }
}

sheet_label_enum! {
    /// Project status. Only these two drive any behavior; other labels
    /// render as written.
    pub enum ProjectStatus {
        InProgress => "In Progress",
        Completed => "Completed",
    }
}

impl ProjectStatus {
    pub(crate) fn missing() -> Self {
        Self::blank()
    }
}

// ============================================================================
// COLLECTIONS AND ACTIONS
// ============================================================================

/// One of the three sheets in the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    Tasks,
    Projects,
    TeamMembers,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Tasks, Collection::Projects, Collection::TeamMembers];

    /// Sheet name used on the wire (`?sheet=` and `sheetName`).
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Collection::Tasks => "Tasks",
            Collection::Projects => "Projects",
            Collection::TeamMembers => "TeamMembers",
        }
    }

    /// Wire name of the key column of this sheet.
    pub fn key_field(&self) -> &'static str {
        match self {
            Collection::Tasks => "TaskNo",
            Collection::Projects => "ProjectName",
            Collection::TeamMembers => "FullName",
        }
    }

    /// Lower-case label for user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Collection::Tasks => "tasks",
            Collection::Projects => "projects",
            Collection::TeamMembers => "teammembers",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}

/// Write action understood by the store endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MutationAction {
    Create,
    Update,
    Delete,
}

impl MutationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationAction::Create => "CREATE",
            MutationAction::Update => "UPDATE",
            MutationAction::Delete => "DELETE",
        }
    }
}

impl fmt::Display for MutationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// BOARD COLUMNS
// ============================================================================

/// A column of the task board. Each column maps to exactly one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoardColumn {
    Todo,
    InProgress,
    Review,
    Done,
}

impl BoardColumn {
    pub const ALL: [BoardColumn; 4] = [
        BoardColumn::Todo,
        BoardColumn::InProgress,
        BoardColumn::Review,
        BoardColumn::Done,
    ];

    pub fn column_id(&self) -> &'static str {
        match self {
            BoardColumn::Todo => "todo-column",
            BoardColumn::InProgress => "inprogress-column",
            BoardColumn::Review => "review-column",
            BoardColumn::Done => "done-column",
        }
    }

    pub fn from_column_id(id: &str) -> Option<BoardColumn> {
        Self::ALL.into_iter().find(|c| c.column_id() == id)
    }

    /// Status a card takes when dropped into this column.
    pub fn status(&self) -> TaskStatus {
        match self {
            BoardColumn::Todo => TaskStatus::ToDo,
            BoardColumn::InProgress => TaskStatus::InProgress,
            BoardColumn::Review => TaskStatus::Review,
            BoardColumn::Done => TaskStatus::Done,
        }
    }

    /// Column that shows a task with the given status, if any.
    pub fn for_status(status: &TaskStatus) -> Option<BoardColumn> {
        match status {
            TaskStatus::ToDo => Some(BoardColumn::Todo),
            TaskStatus::InProgress => Some(BoardColumn::InProgress),
            TaskStatus::Review => Some(BoardColumn::Review),
            TaskStatus::Done => Some(BoardColumn::Done),
            TaskStatus::Unrecognized(_) => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BoardColumn::Todo => "To Do",
            BoardColumn::InProgress => "In Progress",
            BoardColumn::Review => "Review",
            BoardColumn::Done => "Done",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn left(&self) -> Option<BoardColumn> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn right(&self) -> Option<BoardColumn> {
        Self::ALL.get(self.index() + 1).copied()
    }
}

// ============================================================================
// MUTATION LIFECYCLE
// ============================================================================

/// Lifecycle of one user-initiated mutation.
///
/// `Idle -> Validating -> Submitting -> {Succeeded, Failed} -> Idle`.
/// Validation failures go straight from `Validating` to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationPhase {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl MutationPhase {
    pub fn can_transition_to(&self, next: MutationPhase) -> bool {
        use MutationPhase::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Submitting)
                | (Validating, Failed)
                | (Submitting, Succeeded)
                | (Submitting, Failed)
                | (Succeeded, Idle)
                | (Failed, Idle)
        )
    }

    pub fn advance(self, next: MutationPhase) -> Result<MutationPhase, MutationError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(MutationError::InvalidTransition { from: self, to: next })
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MutationPhase::Succeeded | MutationPhase::Failed)
    }
}

impl fmt::Display for MutationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MutationPhase::Idle => "idle",
            MutationPhase::Validating => "validating",
            MutationPhase::Submitting => "submitting",
            MutationPhase::Succeeded => "succeeded",
            MutationPhase::Failed => "failed",
        };
        f.write_str(label)
    }
}
