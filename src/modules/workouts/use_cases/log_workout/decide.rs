// Pure decision function for logging a workout.
//
// Responsibilities
// - Enforce rules: the selection must not be empty and every exercise name
//   must carry visible characters.
// - Never perform input or output; entry construction stays in the handler.

use crate::modules::workouts::use_cases::log_workout::command::LogWorkout;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("no exercises selected")]
    EmptySelection,
    #[error("exercise name must not be blank")]
    BlankExercise,
}

pub fn decide_log_workout(command: &LogWorkout) -> Result<(), DecideError> {
    if command.exercises.is_empty() {
        return Err(DecideError::EmptySelection);
    }
    if command.exercises.iter().any(|name| name.trim().is_empty()) {
        return Err(DecideError::BlankExercise);
    }
    Ok(())
}
