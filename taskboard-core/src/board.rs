//! Board and table view models.
//!
//! Pure functions from a task slice to what the board and the table show.
//! They borrow from the snapshot and never modify it.

use crate::entities::Task;
use crate::enums::{BoardColumn, Priority};

/// One column of the board with the cards it shows, in snapshot order.
#[derive(Debug, Clone)]
pub struct BoardColumnView<'a> {
    pub column: BoardColumn,
    pub cards: Vec<&'a Task>,
}

/// The task board: four status columns.
///
/// Tasks whose status is not one of the four known values appear in no
/// column; they are listed in `unplaced` so callers can report them.
#[derive(Debug, Clone)]
pub struct BoardView<'a> {
    pub columns: Vec<BoardColumnView<'a>>,
    pub unplaced: Vec<&'a Task>,
}

impl<'a> BoardView<'a> {
    pub fn build(tasks: &'a [Task]) -> Self {
        let mut columns: Vec<BoardColumnView<'a>> = BoardColumn::ALL
            .iter()
            .map(|&column| BoardColumnView {
                column,
                cards: Vec::new(),
            })
            .collect();
        let mut unplaced = Vec::new();

        for task in tasks {
            match BoardColumn::for_status(&task.task_status) {
                Some(column) => columns[column.index()].cards.push(task),
                None => unplaced.push(task),
            }
        }

        Self { columns, unplaced }
    }

    pub fn column(&self, column: BoardColumn) -> &BoardColumnView<'a> {
        &self.columns[column.index()]
    }

    /// Column and row of the card for `task_no`, if it is on the board.
    pub fn position_of(&self, task_no: &str) -> Option<(BoardColumn, usize)> {
        self.columns.iter().find_map(|col| {
            col.cards
                .iter()
                .position(|t| t.task_no == task_no)
                .map(|row| (col.column, row))
        })
    }

    /// Number of columns that contain the card for `task_no`.
    pub fn occurrences(&self, task_no: &str) -> usize {
        self.columns
            .iter()
            .map(|col| col.cards.iter().filter(|t| t.task_no == task_no).count())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|c| c.cards.is_empty())
    }
}

// ============================================================================
// TABLE FILTERS
// ============================================================================

/// Selected table filters. `None` matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    pub project: Option<String>,
    pub priority: Option<Priority>,
    pub owner: Option<String>,
}

impl TableFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.project.as_ref().map_or(true, |p| &task.project == p)
            && self.priority.as_ref().map_or(true, |p| &task.priority == p)
            && self.owner.as_ref().map_or(true, |o| &task.task_owner == o)
    }

    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }

    pub fn is_active(&self) -> bool {
        self.project.is_some() || self.priority.is_some() || self.owner.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Choices offered by the table's filter selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub projects: Vec<String>,
    pub priorities: Vec<Priority>,
    pub owners: Vec<String>,
}

impl FilterOptions {
    /// Distinct non-empty values, in the order they first appear.
    pub fn collect(tasks: &[Task]) -> Self {
        let mut options = Self::default();
        for task in tasks {
            push_distinct(&mut options.projects, &task.project);
            if !task.priority.as_str().trim().is_empty() && !options.priorities.contains(&task.priority) {
                options.priorities.push(task.priority.clone());
            }
            push_distinct(&mut options.owners, &task.task_owner);
        }
        options
    }
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    if !value.trim().is_empty() && !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// Cycle an optional selection through `options`: none, first, ..., last, none.
pub fn cycle_option<T: Clone + PartialEq>(current: &Option<T>, options: &[T]) -> Option<T> {
    match current {
        None => options.first().cloned(),
        Some(value) => {
            let index = options.iter().position(|o| o == value)?;
            options.get(index + 1).cloned()
        }
    }
}
