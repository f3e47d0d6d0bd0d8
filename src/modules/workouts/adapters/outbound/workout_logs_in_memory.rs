// In memory implementation of the workout log ports.
//
// Purpose
// - Exercise the logging and performance flows without a database.
//
// Responsibilities
// - Keep entries in an append-only list, filtered per user on read.

use crate::modules::workouts::core::log_entry::WorkoutLogEntry;
use crate::modules::workouts::core::ports::{StoreError, WorkoutLogQueries, WorkoutLogStore};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryWorkoutLogs {
    rows: RwLock<Vec<WorkoutLogEntry>>,
    is_offline: bool,
}

impl InMemoryWorkoutLogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl WorkoutLogStore for InMemoryWorkoutLogs {
    async fn append(&self, entries: &[WorkoutLogEntry]) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Workout log store offline".into()));
        }
        let mut guard = self.rows.write().await;
        guard.extend_from_slice(entries);
        Ok(())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<WorkoutLogEntry>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Workout log store offline".into()));
        }
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl WorkoutLogQueries for InMemoryWorkoutLogs {
    async fn history_for(&self, user_id: &str) -> anyhow::Result<Vec<WorkoutLogEntry>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Workout log store offline"));
        }
        let mut entries: Vec<WorkoutLogEntry> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| {
            (b.log_date, b.created_at, &b.entry_id).cmp(&(a.log_date, a.created_at, &a.entry_id))
        });
        Ok(entries)
    }
}
