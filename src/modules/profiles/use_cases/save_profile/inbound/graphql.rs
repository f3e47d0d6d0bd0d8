use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::profiles::core::profile::{
    Gender, Goal, ParseGenderError, ParseGoalError, UserProfile,
};
use crate::modules::profiles::use_cases::save_profile::command::SaveProfile;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlProfile {
    pub user_id: String,
    pub age: i64,
    pub height_feet: i64,
    pub height_inches: i64,
    pub weight_kg: f64,
    pub gender: String,
    pub goal: String,
    pub is_complete: bool,
}

impl From<UserProfile> for GqlProfile {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id,
            age: i64::from(profile.age),
            height_feet: i64::from(profile.height_feet),
            height_inches: i64::from(profile.height_inches),
            weight_kg: profile.weight_kg,
            gender: profile.gender.as_str().to_string(),
            goal: profile.goal.as_str().to_string(),
            is_complete: profile.is_complete,
        }
    }
}

#[derive(Default)]
pub struct ProfileMutations;

#[Object]
impl ProfileMutations {
    async fn save_profile(
        &self,
        context: &Context<'_>,
        user_id: String,
        age: u32,
        height_feet: u32,
        height_inches: u32,
        weight_kg: f64,
        gender: String,
        goal: String,
    ) -> GqlResult<GqlProfile> {
        let state = context.data_unchecked::<AppState>();

        let gender: Gender = gender
            .parse()
            .map_err(|e: ParseGenderError| async_graphql::Error::new(e.to_string()))?;
        let goal: Goal = goal
            .parse()
            .map_err(|e: ParseGoalError| async_graphql::Error::new(e.to_string()))?;

        let command = SaveProfile {
            user_id,
            age,
            height_feet,
            height_inches,
            weight_kg,
            gender,
            goal,
        };

        let profile = state
            .save_profile_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(profile.into())
    }
}
