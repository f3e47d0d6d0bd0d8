// In memory implementation of the plan queries port.
//
// Purpose
// - Serve the stock diet and workout plans without a database.
//
// Responsibilities
// - Hold one plan of each kind per goal, keyed for direct lookup.

use crate::modules::plans::core::plan::{DietPlan, WorkoutPlan};
use crate::modules::plans::core::ports::PlanQueries;
use crate::modules::profiles::core::profile::Goal;
use std::collections::HashMap;

#[derive(Default)]
pub struct InMemoryPlans {
    diet_plans: HashMap<Goal, DietPlan>,
    workout_plans: HashMap<Goal, WorkoutPlan>,
    is_offline: bool,
}

impl InMemoryPlans {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn insert_diet_plan(&mut self, plan: DietPlan) {
        self.diet_plans.insert(plan.goal, plan);
    }

    pub fn insert_workout_plan(&mut self, plan: WorkoutPlan) {
        self.workout_plans.insert(plan.goal, plan);
    }

    /// The stock plans the coaching staff ships for each goal.
    pub fn with_default_plans() -> Self {
        let mut plans = Self::new();

        plans.insert_diet_plan(DietPlan {
            goal: Goal::Loss,
            breakfast: "Oatmeal with berries and green tea".to_string(),
            lunch: "Grilled chicken salad with olive oil".to_string(),
            dinner: "Steamed vegetables with lentil soup".to_string(),
        });
        plans.insert_diet_plan(DietPlan {
            goal: Goal::Gain,
            breakfast: "Eggs, whole grain toast and a banana shake".to_string(),
            lunch: "Rice, beans and grilled beef".to_string(),
            dinner: "Pasta with salmon and a glass of milk".to_string(),
        });
        plans.insert_diet_plan(DietPlan {
            goal: Goal::Maintain,
            breakfast: "Greek yogurt with granola".to_string(),
            lunch: "Turkey wrap with mixed greens".to_string(),
            dinner: "Baked fish with quinoa".to_string(),
        });

        plans.insert_workout_plan(WorkoutPlan {
            goal: Goal::Loss,
            exercises: vec![
                "Burpees".to_string(),
                "Jumping jacks".to_string(),
                "Mountain climbers".to_string(),
            ],
        });
        plans.insert_workout_plan(WorkoutPlan {
            goal: Goal::Gain,
            exercises: vec![
                "Deadlifts".to_string(),
                "Bench press".to_string(),
                "Squats".to_string(),
            ],
        });
        plans.insert_workout_plan(WorkoutPlan {
            goal: Goal::Maintain,
            exercises: vec![
                "Push ups".to_string(),
                "Plank".to_string(),
                "Lunges".to_string(),
            ],
        });

        plans
    }
}

#[async_trait::async_trait]
impl PlanQueries for InMemoryPlans {
    async fn diet_plan_for(&self, goal: Goal) -> anyhow::Result<Option<DietPlan>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Plan store offline"));
        }
        Ok(self.diet_plans.get(&goal).cloned())
    }

    async fn workout_plan_for(&self, goal: Goal) -> anyhow::Result<Option<WorkoutPlan>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Plan store offline"));
        }
        Ok(self.workout_plans.get(&goal).cloned())
    }
}
