use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::modules::workouts::core::performance::PerformanceReport;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct GetPerformanceParams {
    pub user_id: String,
}

/// Flat response shape consumed by the performance page: ISO date keys,
/// parallel chart arrays, no markup.
#[derive(Serialize)]
pub struct PerformanceResponse {
    pub user_id: String,
    pub streak: u32,
    pub active_days: usize,
    pub total_entries: usize,
    pub average_per_active_day: f64,
    pub chart_labels: Vec<String>,
    pub chart_values: Vec<usize>,
    pub daily_scores: BTreeMap<String, usize>,
    pub grouped_logs: BTreeMap<String, Vec<String>>,
}

impl PerformanceResponse {
    fn new(user_id: String, report: PerformanceReport) -> Self {
        Self {
            user_id,
            streak: report.streak,
            active_days: report.weekly.active_days,
            total_entries: report.weekly.total_entries,
            average_per_active_day: report.weekly.average_per_active_day,
            chart_labels: report.chart.labels,
            chart_values: report.chart.values,
            daily_scores: report
                .daily_scores
                .into_iter()
                .map(|(date, count)| (date.to_string(), count))
                .collect(),
            grouped_logs: report
                .grouped_logs
                .into_iter()
                .map(|(date, exercises)| (date.to_string(), exercises))
                .collect(),
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<GetPerformanceParams>,
) -> impl IntoResponse {
    let entries = match state.workout_log_queries.history_for(&params.user_id).await {
        Ok(entries) => entries,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    match PerformanceReport::from_entries(&entries, Utc::now().date_naive()) {
        Ok(report) => Json(PerformanceResponse::new(params.user_id, report)).into_response(),
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    }
}

#[cfg(test)]
mod get_performance_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::workouts::use_cases::log_workout::command::LogWorkout;
    use crate::shell::state::AppState;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/performance", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_a_zeroed_report_for_a_member_with_no_history() {
        let response = app(AppState::in_memory())
            .oneshot(
                Request::get("/performance?user_id=u-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["streak"], serde_json::json!(0));
        assert_eq!(json["total_entries"], serde_json::json!(0));
        assert_eq!(json["average_per_active_day"], serde_json::json!(0.0));
        assert_eq!(json["chart_labels"], serde_json::json!([]));
        assert_eq!(json["daily_scores"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn it_should_report_a_single_day_streak_after_logging_today() {
        let state = AppState::in_memory();
        let today = chrono::Utc::now().date_naive();
        state
            .log_workout_handler
            .handle(
                LogWorkout {
                    user_id: "u-1".to_string(),
                    exercises: vec!["Plank".to_string(), "Lunges".to_string()],
                },
                today,
            )
            .await
            .expect("seed log failed");

        let response = app(state)
            .oneshot(
                Request::get("/performance?user_id=u-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["streak"], serde_json::json!(1));
        assert_eq!(json["active_days"], serde_json::json!(1));
        assert_eq!(json["total_entries"], serde_json::json!(2));
        assert_eq!(json["average_per_active_day"], serde_json::json!(2.0));
        assert_eq!(json["chart_values"], serde_json::json!([2]));
        assert_eq!(
            json["daily_scores"][today.to_string().as_str()],
            serde_json::json!(2)
        );
    }
}
