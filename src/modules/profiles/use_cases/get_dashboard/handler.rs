// Dashboard summary assembly.
//
// Responsibilities
// - Derive the member-facing health figures from a completed profile.
// - Pure mapping; fetching the profile is the inbound adapter's job.

use crate::modules::profiles::core::profile::{UserProfile, bmi_category};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub user_id: String,
    pub bmi: f64,
    pub bmi_category: String,
    pub daily_calories: u32,
    pub goal: String,
}

impl From<&UserProfile> for DashboardSummary {
    fn from(profile: &UserProfile) -> Self {
        let bmi = profile.bmi();
        Self {
            user_id: profile.user_id.clone(),
            bmi,
            bmi_category: bmi_category(bmi).to_string(),
            daily_calories: profile.goal.daily_calories(),
            goal: profile.goal.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod get_dashboard_handler_tests {
    use super::*;
    use crate::modules::profiles::use_cases::save_profile::decide::decide_save;
    use crate::test_support::fixtures::commands::save_profile::SaveProfileBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_summarise_a_maintain_profile() {
        let profile = decide_save(SaveProfileBuilder::new().build()).unwrap();
        let summary = DashboardSummary::from(&profile);
        assert_eq!(summary.bmi, 22.79);
        assert_eq!(summary.bmi_category, "Normal");
        assert_eq!(summary.daily_calories, 2200);
        assert_eq!(summary.goal, "maintain");
    }

    #[rstest]
    fn it_should_flag_an_overweight_bmi() {
        let profile =
            decide_save(SaveProfileBuilder::new().weight_kg(90.0).build()).unwrap();
        let summary = DashboardSummary::from(&profile);
        // 90 / 1.7526^2 = 29.30
        assert_eq!(summary.bmi, 29.3);
        assert_eq!(summary.bmi_category, "Overweight");
    }
}
