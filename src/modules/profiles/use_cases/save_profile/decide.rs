// Pure decision function for saving a profile.
//
// Responsibilities
// - Enforce rules: age at least 1, inches within a foot, non-zero height,
//   positive weight.
// - On success produce the completed profile. Never perform input or output.

use crate::modules::profiles::core::profile::UserProfile;
use crate::modules::profiles::use_cases::save_profile::command::SaveProfile;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("age must be at least 1")]
    InvalidAge,
    #[error("height inches must be between 0 and 11")]
    InvalidHeightInches,
    #[error("height must be greater than zero")]
    ZeroHeight,
    #[error("weight must be greater than zero")]
    InvalidWeight,
}

pub fn decide_save(command: SaveProfile) -> Result<UserProfile, DecideError> {
    if command.age == 0 {
        return Err(DecideError::InvalidAge);
    }
    if command.height_inches > 11 {
        return Err(DecideError::InvalidHeightInches);
    }
    if command.height_feet == 0 && command.height_inches == 0 {
        return Err(DecideError::ZeroHeight);
    }
    if command.weight_kg <= 0.0 {
        return Err(DecideError::InvalidWeight);
    }
    Ok(UserProfile {
        user_id: command.user_id,
        age: command.age,
        height_feet: command.height_feet,
        height_inches: command.height_inches,
        weight_kg: command.weight_kg,
        gender: command.gender,
        goal: command.goal,
        is_complete: true,
    })
}
