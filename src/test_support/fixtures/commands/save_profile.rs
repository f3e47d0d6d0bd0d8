// Builder for SaveProfile commands with sensible defaults.

use crate::modules::profiles::core::profile::{Gender, Goal};
use crate::modules::profiles::use_cases::save_profile::command::SaveProfile;

pub struct SaveProfileBuilder {
    command: SaveProfile,
}

impl SaveProfileBuilder {
    pub fn new() -> Self {
        Self {
            command: SaveProfile {
                user_id: "user-fixed-0001".to_string(),
                age: 30,
                height_feet: 5,
                height_inches: 9,
                weight_kg: 70.0,
                gender: Gender::Male,
                goal: Goal::Maintain,
            },
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.command.user_id = user_id.into();
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.command.age = age;
        self
    }

    pub fn height(mut self, feet: u32, inches: u32) -> Self {
        self.command.height_feet = feet;
        self.command.height_inches = inches;
        self
    }

    pub fn weight_kg(mut self, weight_kg: f64) -> Self {
        self.command.weight_kg = weight_kg;
        self
    }

    pub fn goal(mut self, goal: Goal) -> Self {
        self.command.goal = goal;
        self
    }

    pub fn build(self) -> SaveProfile {
        self.command
    }
}
