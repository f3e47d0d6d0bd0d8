use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::modules::workouts::use_cases::log_workout::command::LogWorkout;
use crate::modules::workouts::use_cases::log_workout::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LogWorkoutBody {
    pub user_id: String,
    pub exercises: Vec<String>,
}

#[derive(Serialize)]
pub struct LogWorkoutResponse {
    pub entry_ids: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<LogWorkoutBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = LogWorkout {
        user_id: body.user_id,
        exercises: body.exercises,
    };

    // The log date is server-assigned; members cannot backdate entries.
    let log_date = Utc::now().date_naive();

    match state.log_workout_handler.handle(command, log_date).await {
        Ok(entry_ids) => (
            StatusCode::CREATED,
            Json(LogWorkoutResponse { entry_ids }),
        )
            .into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
