use phonebook_core::domain::ContactId;

/// Time-based id source that never hands out the same id twice, even when
/// several contacts are created within one clock tick.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn next(&mut self, now_millis: i64) -> ContactId {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        ContactId(id)
    }

    /// Makes sure ids handed out later sort after `id`.
    pub fn observe(&mut self, id: ContactId) {
        self.last = self.last.max(id.0);
    }
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
