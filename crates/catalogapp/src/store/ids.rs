//! Record id generation.
//!
//! Ids are derived from the wall clock in milliseconds, but never handed out
//! twice: each new id is strictly greater than the last one this generator
//! issued and than every id already present in the target collection.
//! Two creates within the same millisecond therefore get consecutive ids,
//! and ids stay unique after restarts, imports or clock steps backwards.

use crate::model::RecordId;
use chrono::Utc;
use std::cell::Cell;

#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Cell<RecordId>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next id. `max_existing` is the largest id currently stored
    /// in the collection (0 when empty).
    pub fn next_id(&self, max_existing: RecordId) -> RecordId {
        let id = next_candidate(Utc::now().timestamp_millis(), self.last.get(), max_existing);
        self.last.set(id);
        id
    }

    pub fn last_issued(&self) -> RecordId {
        self.last.get()
    }
}

fn next_candidate(now_millis: RecordId, last: RecordId, max_existing: RecordId) -> RecordId {
    now_millis
        .max(last.saturating_add(1))
        .max(max_existing.saturating_add(1))
}
