use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::profiles::use_cases::get_dashboard::handler::DashboardSummary;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct GetDashboardParams {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<GetDashboardParams>,
) -> impl IntoResponse {
    match state.profile_queries.by_user_id(&params.user_id).await {
        // Onboarding must finish before the dashboard makes sense.
        Ok(Some(profile)) if profile.is_complete => {
            Json(DashboardSummary::from(&profile)).into_response()
        }
        Ok(Some(_)) | Ok(None) => StatusCode::CONFLICT.into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

#[cfg(test)]
mod get_dashboard_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::test_support::fixtures::commands::save_profile::SaveProfileBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/dashboard", get(handle))
            .with_state(state)
    }

    async fn state_with_profile(user_id: &str) -> AppState {
        let state = AppState::in_memory();
        state
            .save_profile_handler
            .handle(SaveProfileBuilder::new().user_id(user_id).build())
            .await
            .expect("seed save failed");
        state
    }

    #[tokio::test]
    async fn it_should_return_409_without_a_completed_profile() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::get("/dashboard?user_id=u-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_return_200_with_bmi_and_calories() {
        let response = app(state_with_profile("u-1").await)
            .oneshot(
                Request::get("/dashboard?user_id=u-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["bmi"], serde_json::json!(22.79));
        assert_eq!(json["bmi_category"], serde_json::json!("Normal"));
        assert_eq!(json["daily_calories"], serde_json::json!(2200));
    }
}
