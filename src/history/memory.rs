//! Session-scoped history store

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{error::AppResult, models::HistoryEntry};

use super::{sort_recent_first, HistoryStore};

/// In-memory history, lost on restart
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    entries: RwLock<HashMap<String, Vec<HistoryEntry>>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn record(&self, entry: HistoryEntry) -> AppResult<Uuid> {
        let id = entry.id;
        self.entries
            .write()
            .await
            .entry(entry.user_id.clone())
            .or_default()
            .push(entry);
        Ok(id)
    }

    async fn list(&self, user_id: &str, exercise_id: Option<&str>) -> AppResult<Vec<HistoryEntry>> {
        let entries = self.entries.read().await;
        let mut found: Vec<HistoryEntry> = entries
            .get(user_id)
            .map(|user_entries| {
                user_entries
                    .iter()
                    .filter(|e| exercise_id.is_none() || e.exercise_id.as_deref() == exercise_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        sort_recent_first(&mut found);
        Ok(found)
    }
}
