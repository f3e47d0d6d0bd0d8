// UserProfile is the canonical domain state of a member's onboarding data.
//
// Boundaries
// - This file must not perform input or output.
// - Keep it framework-free.
//
// Testing guidance
// - BMI and calorie figures are pure functions of the profile; assert known values.

use crate::shared::core::math::round2;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Loss,
    Gain,
    Maintain,
}

impl Goal {
    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Loss => "loss",
            Goal::Gain => "gain",
            Goal::Maintain => "maintain",
        }
    }

    /// Daily calorie target per goal, as prescribed by the coaching staff.
    pub fn daily_calories(self) -> u32 {
        match self {
            Goal::Loss => 1800,
            Goal::Gain => 2500,
            Goal::Maintain => 2200,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown goal: {0}")]
pub struct ParseGoalError(String);

impl FromStr for Goal {
    type Err = ParseGoalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "loss" => Ok(Goal::Loss),
            "gain" => Ok(Goal::Gain),
            "maintain" => Ok(Goal::Maintain),
            other => Err(ParseGoalError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown gender: {0}")]
pub struct ParseGenderError(String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            unknown => Err(ParseGenderError(unknown.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub age: u32,
    pub height_feet: u32,
    pub height_inches: u32,
    pub weight_kg: f64,
    pub gender: Gender,
    pub goal: Goal,
    pub is_complete: bool,
}

impl UserProfile {
    pub fn height_meters(&self) -> f64 {
        let total_inches = self.height_feet * 12 + self.height_inches;
        f64::from(total_inches) * 0.0254
    }

    /// Body mass index rounded to two decimals. Zero height yields 0
    /// rather than a division error.
    pub fn bmi(&self) -> f64 {
        let meters = self.height_meters();
        if meters <= 0.0 {
            return 0.0;
        }
        round2(self.weight_kg / (meters * meters))
    }
}

pub fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}
