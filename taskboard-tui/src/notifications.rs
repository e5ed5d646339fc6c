//! Notification system for the TUI.
//!
//! Every notification dismisses itself once its time to live has passed.

use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl NotificationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "SUCCESS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }
}

#[derive(Debug, Clone)]
struct Posted {
    notification: Notification,
    expires_at: Instant,
}

/// Visible notifications, oldest first.
#[derive(Debug, Clone)]
pub struct Notifications {
    ttl: Duration,
    items: VecDeque<Posted>,
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            items: VecDeque::new(),
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        self.items.push_back(Posted {
            notification,
            expires_at: now + self.ttl,
        });
    }

    /// Drop every notification whose time is up.
    pub fn expire(&mut self, now: Instant) {
        self.items.retain(|p| p.expires_at > now);
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.back().map(|p| &p.notification)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().map(|p| &p.notification)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
