// WorkoutLogEntry is the immutable record of one completed exercise.
//
// Lifecycle
// - Created by the log_workout use case with a server-assigned log_date.
// - Never updated afterwards; deletion is an external concern.
//
// Notes
// - Several entries may share (user_id, log_date): a day's score is the raw
//   entry count, not a set of distinct exercises.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutLogEntry {
    pub entry_id: String,
    pub user_id: String,
    pub exercise_name: String,
    pub completed: bool,
    pub log_date: NaiveDate,
    pub created_at: i64,
}
