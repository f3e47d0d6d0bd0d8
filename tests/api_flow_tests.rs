// End to end flows through the public surface: onboarding, plan lookup,
// workout logging and the performance report.

use async_graphql::{EmptySubscription, Schema};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fitness_tracker::shell::graphql::{AppSchema, MutationRoot, QueryRoot};
use fitness_tracker::shell::http::router;
use fitness_tracker::shell::state::AppState;

fn app(state: &AppState) -> Router {
    router(state.clone())
}

async fn post_json(state: &AppState, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app(state)
        .oneshot(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn get_json(state: &AppState, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app(state)
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn it_should_onboard_log_workouts_and_report_performance() {
    let state = AppState::in_memory();

    // Onboarding
    let (status, profile) = post_json(
        &state,
        "/profile",
        r#"{"user_id":"u-1","age":28,"height_feet":5,"height_inches":7,"weight_kg":64.0,"gender":"female","goal":"loss"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["is_complete"], serde_json::json!(true));

    // Dashboard figures
    let (status, dashboard) = get_json(&state, "/dashboard?user_id=u-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["daily_calories"], serde_json::json!(1800));
    assert_eq!(dashboard["goal"], serde_json::json!("loss"));

    // Plans match the member's goal
    let (status, diet) = get_json(&state, "/diet-plan?user_id=u-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(diet["goal"], serde_json::json!("loss"));
    let (status, workout) = get_json(&state, "/workout-plan?user_id=u-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(workout["exercises"].as_array().map(|a| a.len()), Some(3));

    // Two logging sessions on the same day
    let (status, first) = post_json(
        &state,
        "/log-workout",
        r#"{"user_id":"u-1","exercises":["Burpees","Jumping jacks","Mountain climbers"]}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["entry_ids"].as_array().map(|a| a.len()), Some(3));

    let (status, second) = post_json(
        &state,
        "/log-workout",
        r#"{"user_id":"u-1","exercises":["Burpees","Plank"]}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["entry_ids"].as_array().map(|a| a.len()), Some(2));

    // Full history, repeated exercises counted separately
    let (status, history) = get_json(&state, "/workout-log?user_id=u-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().map(|a| a.len()), Some(5));

    // Performance over a single active day
    let (status, performance) = get_json(&state, "/performance?user_id=u-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(performance["streak"], serde_json::json!(1));
    assert_eq!(performance["active_days"], serde_json::json!(1));
    assert_eq!(performance["total_entries"], serde_json::json!(5));
    assert_eq!(performance["average_per_active_day"], serde_json::json!(5.0));
    assert_eq!(performance["chart_values"], serde_json::json!([5]));
    assert_eq!(
        performance["chart_labels"].as_array().map(|a| a.len()),
        Some(1)
    );
    let scores = performance["daily_scores"].as_object().unwrap();
    assert_eq!(scores.values().map(|v| v.as_u64().unwrap()).sum::<u64>(), 5);
}

#[tokio::test]
async fn it_should_keep_members_histories_independent() {
    let state = AppState::in_memory();

    post_json(
        &state,
        "/log-workout",
        r#"{"user_id":"u-1","exercises":["Plank"]}"#,
    )
    .await;
    post_json(
        &state,
        "/log-workout",
        r#"{"user_id":"u-2","exercises":["Squats","Deadlifts"]}"#,
    )
    .await;

    let (_, mine) = get_json(&state, "/performance?user_id=u-1").await;
    let (_, theirs) = get_json(&state, "/performance?user_id=u-2").await;
    assert_eq!(mine["total_entries"], serde_json::json!(1));
    assert_eq!(theirs["total_entries"], serde_json::json!(2));
}

#[tokio::test]
async fn it_should_serve_the_same_flows_over_graphql() {
    let state = AppState::in_memory();
    let schema: AppSchema = Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish();

    let response = schema
        .execute(r#"mutation { logWorkout(userId: "u-9", exercises: ["Plank", "Lunges"]) }"#)
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let response = schema
        .execute(r#"{ performanceReport(userId: "u-9") { streak totalEntries averagePerActiveDay } }"#)
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let json = response.data.into_json().unwrap();
    assert_eq!(json["performanceReport"]["streak"], serde_json::json!(1));
    assert_eq!(
        json["performanceReport"]["totalEntries"],
        serde_json::json!(2)
    );
    assert_eq!(
        json["performanceReport"]["averagePerActiveDay"],
        serde_json::json!(2.0)
    );

    let response = schema
        .execute(
            r#"mutation { saveProfile(userId: "u-9", age: 28, heightFeet: 5, heightInches: 7, weightKg: 64.0, gender: "female", goal: "loss") { isComplete goal } }"#,
        )
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    let json = response.data.into_json().unwrap();
    assert_eq!(json["saveProfile"]["isComplete"], serde_json::json!(true));
    assert_eq!(json["saveProfile"]["goal"], serde_json::json!("loss"));

    let response = schema
        .execute(r#"mutation { saveProfile(userId: "u-9", age: 0, heightFeet: 5, heightInches: 7, weightKg: 64.0, gender: "female", goal: "loss") { isComplete } }"#)
        .await;
    assert!(!response.errors.is_empty());
}
