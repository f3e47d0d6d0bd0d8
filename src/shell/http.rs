use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::plans::use_cases::get_diet_plan::inbound::http as diet_plan_http;
use crate::modules::plans::use_cases::get_workout_plan::inbound::http as workout_plan_http;
use crate::modules::profiles::use_cases::get_dashboard::inbound::http as dashboard_http;
use crate::modules::profiles::use_cases::get_profile::inbound::http as get_profile_http;
use crate::modules::profiles::use_cases::save_profile::inbound::http as save_profile_http;
use crate::modules::workouts::use_cases::get_performance::inbound::http as performance_http;
use crate::modules::workouts::use_cases::list_workout_logs::inbound::http as workout_log_http;
use crate::modules::workouts::use_cases::log_workout::inbound::http as log_workout_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/profile",
            post(save_profile_http::handle).get(get_profile_http::handle),
        )
        .route("/dashboard", get(dashboard_http::handle))
        .route("/diet-plan", get(diet_plan_http::handle))
        .route("/workout-plan", get(workout_plan_http::handle))
        .route("/log-workout", post(log_workout_http::handle))
        .route("/workout-log", get(workout_log_http::handle))
        .route("/performance", get(performance_http::handle))
        .with_state(state)
}
