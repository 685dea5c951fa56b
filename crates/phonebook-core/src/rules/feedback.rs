use crate::domain::ids::ContactId;
use std::time::{Duration, Instant};

pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 2_000;
pub const MAX_COPY_FEEDBACK_MS: u64 = 60_000;

/// Tracks which contact shows the "copied" hint and until when.
///
/// Only one contact carries the hint at a time. Marking a contact replaces
/// both the id and the deadline, so an older copy can never clear a newer one.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    window: Duration,
    active: Option<(ContactId, Instant)>,
}

impl CopyFeedback {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            active: None,
        }
    }

    pub fn mark(&mut self, id: ContactId, now: Instant) {
        self.active = Some((id, now + self.window));
    }

    /// Drops the hint once its deadline passed. Returns true if it was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.active {
            Some((_, deadline)) if now >= deadline => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn copied_id(&self) -> Option<ContactId> {
        self.active.map(|(id, _)| id)
    }

    pub fn is_copied(&self, id: ContactId) -> bool {
        self.copied_id() == Some(id)
    }

    /// Clears the hint if it belongs to `id`, e.g. after the contact was deleted.
    pub fn forget(&mut self, id: ContactId) {
        if self.is_copied(id) {
            self.active = None;
        }
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_COPY_FEEDBACK_MS))
    }
}
