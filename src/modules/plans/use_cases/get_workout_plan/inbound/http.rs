use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct GetWorkoutPlanParams {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<GetWorkoutPlanParams>,
) -> impl IntoResponse {
    let profile = match state.profile_queries.by_user_id(&params.user_id).await {
        Ok(Some(profile)) if profile.is_complete => profile,
        Ok(_) => return StatusCode::CONFLICT.into_response(),
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    match state.plan_queries.workout_plan_for(profile.goal).await {
        Ok(Some(plan)) => Json(plan).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
