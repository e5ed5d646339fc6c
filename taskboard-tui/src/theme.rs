//! Light and dark palettes and color utilities.

use crate::notifications::NotificationLevel;
use ratatui::style::Color;
use taskboard_core::{Priority, ProjectStatus, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            dark: false,
            bg: Color::Rgb(249, 250, 251),
            bg_highlight: Color::Rgb(229, 231, 235),
            primary: Color::Rgb(37, 99, 235),
            secondary: Color::Rgb(79, 70, 229),
            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(202, 138, 4),
            error: Color::Rgb(220, 38, 38),
            info: Color::Rgb(37, 99, 235),
            text: Color::Rgb(17, 24, 39),
            text_dim: Color::Rgb(107, 114, 128),
            border: Color::Rgb(209, 213, 219),
            border_focus: Color::Rgb(37, 99, 235),
        }
    }

    pub fn dark() -> Self {
        Self {
            dark: true,
            bg: Color::Rgb(17, 24, 39),
            bg_highlight: Color::Rgb(55, 65, 81),
            primary: Color::Rgb(96, 165, 250),
            secondary: Color::Rgb(129, 140, 248),
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(250, 204, 21),
            error: Color::Rgb(248, 113, 113),
            info: Color::Rgb(96, 165, 250),
            text: Color::Rgb(243, 244, 246),
            text_dim: Color::Rgb(156, 163, 175),
            border: Color::Rgb(75, 85, 99),
            border_focus: Color::Rgb(96, 165, 250),
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn toggled(&self) -> Self {
        Self::for_mode(!self.dark)
    }
}

pub fn priority_color(priority: &Priority, theme: &Theme) -> Color {
    match priority {
        Priority::High => theme.error,
        Priority::Medium => theme.warning,
        Priority::Low => theme.success,
        Priority::Unrecognized(_) => theme.text_dim,
    }
}

pub fn task_status_color(status: &TaskStatus, theme: &Theme) -> Color {
    match status {
        TaskStatus::ToDo => theme.text,
        TaskStatus::InProgress => theme.primary,
        TaskStatus::Review => theme.secondary,
        TaskStatus::Done => theme.success,
        TaskStatus::Unrecognized(_) => theme.text_dim,
    }
}

pub fn project_status_color(status: &ProjectStatus, theme: &Theme) -> Color {
    match status {
        ProjectStatus::Completed => theme.success,
        ProjectStatus::InProgress => theme.primary,
        ProjectStatus::Unrecognized(_) => theme.text_dim,
    }
}

pub fn notification_color(level: NotificationLevel, theme: &Theme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}
