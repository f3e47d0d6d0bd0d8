// Ports define what the workouts module needs from the outside world,
// without implementing it.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the
//   adapters layer.

use crate::modules::workouts::core::log_entry::WorkoutLogEntry;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait WorkoutLogStore: Send + Sync {
    /// Append-only: entries are never updated once written.
    async fn append(&self, entries: &[WorkoutLogEntry]) -> Result<(), StoreError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<WorkoutLogEntry>, StoreError>;
}

#[async_trait]
pub trait WorkoutLogQueries: Send + Sync {
    /// Full history for a user, newest log date first.
    async fn history_for(&self, user_id: &str) -> anyhow::Result<Vec<WorkoutLogEntry>>;
}
