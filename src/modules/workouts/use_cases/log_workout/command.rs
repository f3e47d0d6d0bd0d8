// Command data type for logging completed exercises.
//
// Responsibilities
// - Carry the member's selection for the decider to validate.
// - Be independent of transport layer details (not tied to HTTP or GraphQL).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogWorkout {
    pub user_id: String,
    pub exercises: Vec<String>,
}
