//! Submission history
//!
//! An append-only, per-user log of completed runs. Entries are created once by
//! the submission service and never changed afterwards; readers get clones.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{error::AppResult, models::HistoryEntry};

pub use memory::InMemoryHistoryStore;

/// Append-only history storage
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append an entry and return its id
    async fn record(&self, entry: HistoryEntry) -> AppResult<Uuid>;

    /// Entries of `user_id`, most recent first, optionally for one exercise
    async fn list(&self, user_id: &str, exercise_id: Option<&str>) -> AppResult<Vec<HistoryEntry>>;
}

/// Sort newest first; ids break ties because UUIDv7 is time ordered
pub(crate) fn sort_recent_first(entries: &mut [HistoryEntry]) {
    entries.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
}
