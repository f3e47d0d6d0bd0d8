// Builders and helpers for workout log entries used across the test suite.

use crate::modules::workouts::core::log_entry::WorkoutLogEntry;
use chrono::NaiveDate;
use uuid::Uuid;

pub fn naive_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date")
}

pub struct WorkoutLogEntryBuilder {
    entry: WorkoutLogEntry,
}

impl WorkoutLogEntryBuilder {
    pub fn new() -> Self {
        Self {
            entry: WorkoutLogEntry {
                entry_id: Uuid::now_v7().to_string(),
                user_id: "user-fixed-0001".to_string(),
                exercise_name: "Push ups".to_string(),
                completed: true,
                log_date: naive_date(2024, 3, 1),
                created_at: 1_700_000_000_000,
            },
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.entry.user_id = user_id.into();
        self
    }

    pub fn exercise(mut self, name: impl Into<String>) -> Self {
        self.entry.exercise_name = name.into();
        self
    }

    pub fn on(mut self, log_date: NaiveDate) -> Self {
        self.entry.log_date = log_date;
        self
    }

    pub fn build(self) -> WorkoutLogEntry {
        self.entry
    }
}

/// One default entry per date, in the given order.
pub fn entries_on(dates: &[NaiveDate]) -> Vec<WorkoutLogEntry> {
    dates
        .iter()
        .map(|date| WorkoutLogEntryBuilder::new().on(*date).build())
        .collect()
}
