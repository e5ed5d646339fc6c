//! Dashboard metrics.
//!
//! Every number here is recomputed from a snapshot on each render, so the
//! dashboard can never drift from the cache.

use crate::entities::{Project, Task};
use crate::enums::{Priority, TaskStatus};
use crate::snapshot::Snapshot;
use crate::Date;
use std::collections::HashSet;

/// Maximum number of tasks on the default agenda.
pub const AGENDA_LIMIT: usize = 5;

/// The four counters shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub today_tasks: usize,
    pub critical_tasks: usize,
    pub new_tasks: usize,
    pub active_projects: usize,
}

impl DashboardSummary {
    pub fn compute(snapshot: &Snapshot, today: Date) -> Self {
        Self {
            today_tasks: todays_tasks(&snapshot.tasks, today).len(),
            critical_tasks: critical_tasks(&snapshot.tasks).len(),
            new_tasks: new_tasks(&snapshot.tasks).len(),
            active_projects: active_projects(&snapshot.projects).len(),
        }
    }
}

/// Open tasks due today.
pub fn todays_tasks(tasks: &[Task], today: Date) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| t.due_date() == Some(today) && t.is_open())
        .collect()
}

/// Open high-priority tasks.
pub fn critical_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| t.priority == Priority::High && t.is_open())
        .collect()
}

/// Tasks not started yet.
pub fn new_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| t.task_status == TaskStatus::ToDo)
        .collect()
}

pub fn active_projects(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| p.is_active()).collect()
}

/// Today's tasks followed by critical tasks, each task once, capped at
/// [`AGENDA_LIMIT`].
pub fn agenda(tasks: &[Task], today: Date) -> Vec<&Task> {
    let mut seen = HashSet::new();
    todays_tasks(tasks, today)
        .into_iter()
        .chain(critical_tasks(tasks))
        .filter(|t| seen.insert(t.task_no.clone()))
        .take(AGENDA_LIMIT)
        .collect()
}

/// Which list the dashboard's lower panel shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardList {
    #[default]
    Agenda,
    Today,
    Critical,
    New,
    ActiveProjects,
}

impl DashboardList {
    pub const ALL: [DashboardList; 5] = [
        DashboardList::Agenda,
        DashboardList::Today,
        DashboardList::Critical,
        DashboardList::New,
        DashboardList::ActiveProjects,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DashboardList::Agenda => "Today's Agenda",
            DashboardList::Today => "Today's Tasks",
            DashboardList::Critical => "Critical Tasks",
            DashboardList::New => "New Tasks (To Do)",
            DashboardList::ActiveProjects => "Active Projects",
        }
    }

    /// Tasks for the task lists; empty for [`DashboardList::ActiveProjects`].
    pub fn tasks<'a>(&self, snapshot: &'a Snapshot, today: Date) -> Vec<&'a Task> {
        match self {
            DashboardList::Agenda => agenda(&snapshot.tasks, today),
            DashboardList::Today => todays_tasks(&snapshot.tasks, today),
            DashboardList::Critical => critical_tasks(&snapshot.tasks),
            DashboardList::New => new_tasks(&snapshot.tasks),
            DashboardList::ActiveProjects => Vec::new(),
        }
    }

    pub fn next(&self) -> DashboardList {
        let index = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}
