//! Edit forms for the three record types.
//!
//! A form holds the user-editable columns as plain text. Applying a form
//! onto the record it was opened from keeps every column the form does not
//! show, so an unchanged form writes back an identical record.

use crate::entities::{Project, Task, TeamMember};
use crate::enums::{Priority, ProjectStatus, TaskStatus};
use crate::error::ValidationError;
use crate::generated_task_no;
use serde_json::Value;

/// Field-by-field access used by the terminal form editor.
pub trait FormFields {
    /// Labels of the editable fields, in display order.
    fn labels(&self) -> &'static [&'static str];

    fn value(&self, index: usize) -> Option<&str>;

    fn value_mut(&mut self, index: usize) -> Option<&mut String>;

    /// Check required fields before anything is sent.
    fn validate(&self) -> Result<(), ValidationError>;

    fn len(&self) -> usize {
        self.labels().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reject a blank required field.
pub fn require_field(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredFieldMissing {
            field: field.to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// TASK FORM
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub task_no: String,
    pub task_name: String,
    pub project: String,
    pub priority: String,
    pub task_status: String,
    pub start_date: String,
    pub end_date: String,
    pub task_owner: String,
    pub notes: String,
}

impl TaskForm {
    const LABELS: &'static [&'static str] = &[
        "Task No",
        "Task Name",
        "Project",
        "Priority",
        "Status",
        "Start Date",
        "End Date",
        "Owner",
        "Notes",
    ];

    /// Blank form for a new task, status preset to "To Do".
    pub fn blank() -> Self {
        Self {
            priority: Priority::Medium.to_string(),
            task_status: TaskStatus::ToDo.to_string(),
            ..Self::default()
        }
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            task_no: task.task_no.clone(),
            task_name: task.task_name.clone(),
            project: task.project.clone(),
            priority: task.priority.to_string(),
            task_status: task.task_status.to_string(),
            start_date: task.start_date.clone(),
            end_date: task.end_date.clone(),
            task_owner: task.task_owner.clone(),
            notes: task.notes.clone(),
        }
    }

    /// The prior record with this form's fields written over it.
    pub fn apply_to(&self, prior: &Task) -> Task {
        let mut task = prior.clone();
        task.task_no = self.task_no.clone();
        task.task_name = self.task_name.clone();
        task.project = self.project.clone();
        task.priority = Priority::parse(&self.priority);
        task.task_status = TaskStatus::parse(&self.task_status);
        task.start_date = self.start_date.clone();
        task.end_date = self.end_date.clone();
        task.task_owner = self.task_owner.clone();
        task.notes = self.notes.clone();
        task
    }

    /// A record for CREATE. A blank status becomes "To Do" and a blank
    /// task number is generated from `epoch_millis`.
    pub fn into_new_task(self, epoch_millis: i64) -> Task {
        let task_no = if self.task_no.trim().is_empty() {
            generated_task_no(epoch_millis, 0)
        } else {
            self.task_no
        };
        let task_status = if self.task_status.trim().is_empty() {
            TaskStatus::ToDo
        } else {
            TaskStatus::parse(&self.task_status)
        };

        let mut task = Task::new(task_no, self.task_name)
            .with_project(self.project)
            .with_priority(Priority::parse(&self.priority))
            .with_status(task_status)
            .with_end_date(self.end_date)
            .with_owner(self.task_owner);
        task.start_date = self.start_date;
        task.notes = self.notes;
        task.extra
            .insert("TaskType".to_string(), Value::String(String::new()));
        task
    }
}

impl FormFields for TaskForm {
    fn labels(&self) -> &'static [&'static str] {
        Self::LABELS
    }

    fn value(&self, index: usize) -> Option<&str> {
        let value = match index {
            0 => &self.task_no,
            1 => &self.task_name,
            2 => &self.project,
            3 => &self.priority,
            4 => &self.task_status,
            5 => &self.start_date,
            6 => &self.end_date,
            7 => &self.task_owner,
            8 => &self.notes,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.task_no),
            1 => Some(&mut self.task_name),
            2 => Some(&mut self.project),
            3 => Some(&mut self.priority),
            4 => Some(&mut self.task_status),
            5 => Some(&mut self.start_date),
            6 => Some(&mut self.end_date),
            7 => Some(&mut self.task_owner),
            8 => Some(&mut self.notes),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_field("TaskName", &self.task_name)
    }
}

// ============================================================================
// PROJECT FORM
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub project_name: String,
    pub description: String,
    pub team_members: String,
    pub status: String,
    pub timeline: String,
}

impl ProjectForm {
    const LABELS: &'static [&'static str] =
        &["Project Name", "Description", "Team Members", "Status", "Timeline"];

    pub fn blank() -> Self {
        Self {
            status: ProjectStatus::InProgress.to_string(),
            ..Self::default()
        }
    }

    pub fn from_project(project: &Project) -> Self {
        Self {
            project_name: project.project_name.clone(),
            description: project.description.clone(),
            team_members: project.team_members.clone(),
            status: project.status.to_string(),
            timeline: project.timeline.clone(),
        }
    }

    pub fn apply_to(&self, prior: &Project) -> Project {
        let mut project = prior.clone();
        project.project_name = self.project_name.clone();
        project.description = self.description.clone();
        project.team_members = self.team_members.clone();
        project.status = ProjectStatus::parse(&self.status);
        project.timeline = self.timeline.clone();
        project
    }

    pub fn into_new_project(self) -> Project {
        let mut project = Project::new(self.project_name, ProjectStatus::parse(&self.status));
        project.description = self.description;
        project.team_members = self.team_members;
        project.timeline = self.timeline;
        project
    }
}

impl FormFields for ProjectForm {
    fn labels(&self) -> &'static [&'static str] {
        Self::LABELS
    }

    fn value(&self, index: usize) -> Option<&str> {
        let value = match index {
            0 => &self.project_name,
            1 => &self.description,
            2 => &self.team_members,
            3 => &self.status,
            4 => &self.timeline,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.project_name),
            1 => Some(&mut self.description),
            2 => Some(&mut self.team_members),
            3 => Some(&mut self.status),
            4 => Some(&mut self.timeline),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_field("ProjectName", &self.project_name)
    }
}

// ============================================================================
// TEAM MEMBER FORM
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberForm {
    pub full_name: String,
    pub role: String,
    pub email: String,
}

impl MemberForm {
    const LABELS: &'static [&'static str] = &["Full Name", "Role", "Email"];

    pub fn from_member(member: &TeamMember) -> Self {
        Self {
            full_name: member.full_name.clone(),
            role: member.role.clone(),
            email: member.email.clone(),
        }
    }

    pub fn apply_to(&self, prior: &TeamMember) -> TeamMember {
        let mut member = prior.clone();
        member.full_name = self.full_name.clone();
        member.role = self.role.clone();
        member.email = self.email.clone();
        member
    }

    pub fn into_new_member(self) -> TeamMember {
        let mut member = TeamMember::new(self.full_name, self.role);
        member.email = self.email;
        member
    }
}

impl FormFields for MemberForm {
    fn labels(&self) -> &'static [&'static str] {
        Self::LABELS
    }

    fn value(&self, index: usize) -> Option<&str> {
        let value = match index {
            0 => &self.full_name,
            1 => &self.role,
            2 => &self.email,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.full_name),
            1 => Some(&mut self.role),
            2 => Some(&mut self.email),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_field("FullName", &self.full_name)
    }
}
