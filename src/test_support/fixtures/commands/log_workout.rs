// Builder for LogWorkout commands with sensible defaults.

use crate::modules::workouts::use_cases::log_workout::command::LogWorkout;

pub struct LogWorkoutBuilder {
    command: LogWorkout,
}

impl LogWorkoutBuilder {
    pub fn new() -> Self {
        Self {
            command: LogWorkout {
                user_id: "user-fixed-0001".to_string(),
                exercises: vec!["Push ups".to_string(), "Plank".to_string()],
            },
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.command.user_id = user_id.into();
        self
    }

    pub fn exercises(mut self, exercises: &[&str]) -> Self {
        self.command.exercises = exercises.iter().map(|name| name.to_string()).collect();
        self
    }

    pub fn build(self) -> LogWorkout {
        self.command
    }
}
