use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::workouts::use_cases::log_workout::command::LogWorkout;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct WorkoutMutations;

#[Object]
impl WorkoutMutations {
    async fn log_workout(
        &self,
        context: &Context<'_>,
        user_id: String,
        exercises: Vec<String>,
    ) -> GqlResult<Vec<ID>> {
        let state = context.data_unchecked::<AppState>();

        let command = LogWorkout { user_id, exercises };
        let log_date = Utc::now().date_naive();

        let entry_ids = state
            .log_workout_handler
            .handle(command, log_date)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(entry_ids.into_iter().map(ID).collect())
    }
}
