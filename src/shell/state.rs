use crate::modules::plans::adapters::outbound::plans_in_memory::InMemoryPlans;
use crate::modules::plans::core::ports::PlanQueries;
use crate::modules::profiles::adapters::outbound::profiles_in_memory::InMemoryProfiles;
use crate::modules::profiles::core::ports::ProfileQueries;
use crate::modules::profiles::use_cases::save_profile::handler::SaveProfileHandler;
use crate::modules::workouts::adapters::outbound::workout_logs_in_memory::InMemoryWorkoutLogs;
use crate::modules::workouts::core::ports::WorkoutLogQueries;
use crate::modules::workouts::use_cases::log_workout::handler::LogWorkoutHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub save_profile_handler: Arc<SaveProfileHandler<InMemoryProfiles>>,
    pub profile_queries: Arc<dyn ProfileQueries + Send + Sync>,
    pub plan_queries: Arc<dyn PlanQueries + Send + Sync>,
    pub log_workout_handler: Arc<LogWorkoutHandler<InMemoryWorkoutLogs>>,
    pub workout_log_queries: Arc<dyn WorkoutLogQueries + Send + Sync>,
}

impl AppState {
    /// Wire every port to its in-memory adapter, with the stock plans seeded.
    pub fn in_memory() -> Self {
        let profiles = Arc::new(InMemoryProfiles::new());
        let plans = Arc::new(InMemoryPlans::with_default_plans());
        let workout_logs = Arc::new(InMemoryWorkoutLogs::new());

        Self {
            save_profile_handler: Arc::new(SaveProfileHandler::new(profiles.clone())),
            profile_queries: profiles,
            plan_queries: plans,
            log_workout_handler: Arc::new(LogWorkoutHandler::new(workout_logs.clone())),
            workout_log_queries: workout_logs,
        }
    }
}
