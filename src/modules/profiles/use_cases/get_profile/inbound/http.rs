use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct GetProfileParams {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<GetProfileParams>,
) -> impl IntoResponse {
    match state.profile_queries.by_user_id(&params.user_id).await {
        Ok(Some(profile)) => Json(profile).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
