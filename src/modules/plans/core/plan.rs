// Static coaching plans, looked up by goal.
//
// Boundaries
// - Plain data. Seeding and lookup live in the adapters layer.

use crate::modules::profiles::core::profile::Goal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    pub goal: Goal,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub goal: Goal,
    pub exercises: Vec<String>,
}
