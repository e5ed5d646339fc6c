//! Delayed reload scheduling.

use std::time::Duration;
use tokio::time::Instant;

/// Holds at most one pending reload deadline.
///
/// Scheduling while a reload is pending keeps the later of the two
/// deadlines, so a burst of writes produces one reload.
#[derive(Debug, Clone, Default)]
pub struct ReloadScheduler {
    deadline: Option<Instant>,
}

impl ReloadScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        let at = now + delay;
        self.deadline = Some(match self.deadline {
            Some(existing) if existing > at => existing,
            _ => at,
        });
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Clear and report the pending reload if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if at <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
