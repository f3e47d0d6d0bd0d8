use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::profiles::core::profile::{Gender, Goal};
use crate::modules::profiles::use_cases::save_profile::command::SaveProfile;
use crate::modules::profiles::use_cases::save_profile::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SaveProfileBody {
    pub user_id: String,
    pub age: u32,
    pub height_feet: u32,
    pub height_inches: u32,
    pub weight_kg: f64,
    pub gender: Gender,
    pub goal: Goal,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SaveProfileBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = SaveProfile {
        user_id: body.user_id,
        age: body.age,
        height_feet: body.height_feet,
        height_inches: body.height_inches,
        weight_kg: body.weight_kg,
        gender: body.gender,
        goal: body.goal,
    };

    match state.save_profile_handler.handle(command).await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(ApplicationError::Domain(_)) => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
