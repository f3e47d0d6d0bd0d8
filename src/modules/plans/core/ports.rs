use crate::modules::plans::core::plan::{DietPlan, WorkoutPlan};
use crate::modules::profiles::core::profile::Goal;
use async_trait::async_trait;

#[async_trait]
pub trait PlanQueries: Send + Sync {
    async fn diet_plan_for(&self, goal: Goal) -> anyhow::Result<Option<DietPlan>>;
    async fn workout_plan_for(&self, goal: Goal) -> anyhow::Result<Option<WorkoutPlan>>;
}
