// Command data type for saving a member profile.
//
// Responsibilities
// - Carry input data for the decider to validate and convert into a profile.
// - Be independent of transport layer details (not tied to HTTP or GraphQL).

use crate::modules::profiles::core::profile::{Gender, Goal};

#[derive(Debug, Clone, PartialEq)]
pub struct SaveProfile {
    pub user_id: String,
    pub age: u32,
    pub height_feet: u32,
    pub height_inches: u32,
    pub weight_kg: f64,
    pub gender: Gender,
    pub goal: Goal,
}
