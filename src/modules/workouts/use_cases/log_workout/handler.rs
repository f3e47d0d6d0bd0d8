// Log workout command handler orchestrates the write flow.
//
// Responsibilities
// - Call the decider with the command.
// - Mint one completed entry per selected exercise, dated with the supplied
//   log date, and append them through the WorkoutLogStore port.

use crate::modules::workouts::core::log_entry::WorkoutLogEntry;
use crate::modules::workouts::core::ports::{StoreError, WorkoutLogStore};
use crate::modules::workouts::use_cases::log_workout::command::LogWorkout;
use crate::modules::workouts::use_cases::log_workout::decide::decide_log_workout;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Domain(String),
}

pub struct LogWorkoutHandler<TStore>
where
    TStore: WorkoutLogStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> LogWorkoutHandler<TStore>
where
    TStore: WorkoutLogStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// `log_date` is injected by the inbound adapter so tests can pin days.
    pub async fn handle(
        &self,
        command: LogWorkout,
        log_date: NaiveDate,
    ) -> Result<Vec<String>, ApplicationError> {
        decide_log_workout(&command)
            .map_err(|error| ApplicationError::Domain(error.to_string()))?;

        let created_at = Utc::now().timestamp_millis();
        let entries: Vec<WorkoutLogEntry> = command
            .exercises
            .iter()
            .map(|name| WorkoutLogEntry {
                entry_id: Uuid::now_v7().to_string(),
                user_id: command.user_id.clone(),
                exercise_name: name.trim().to_string(),
                completed: true,
                log_date,
                created_at,
            })
            .collect();

        self.store.append(&entries).await?;
        Ok(entries.into_iter().map(|entry| entry.entry_id).collect())
    }
}
