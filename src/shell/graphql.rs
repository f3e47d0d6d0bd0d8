use async_graphql::{EmptySubscription, MergedObject, Schema};

pub use crate::modules::workouts::use_cases::get_performance::inbound::graphql::QueryRoot;

use crate::modules::profiles::use_cases::save_profile::inbound::graphql::ProfileMutations;
use crate::modules::workouts::use_cases::log_workout::inbound::graphql::WorkoutMutations;

#[derive(MergedObject, Default)]
pub struct MutationRoot(ProfileMutations, WorkoutMutations);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;
