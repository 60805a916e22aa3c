use std::collections::BTreeSet;

use serde::Deserialize;

use crate::error::ValidationError;

use super::dto::{ActivityLevel, Goal, Profile, Sex};

pub const FALLBACK_AGE: u32 = 30;
pub const FALLBACK_WEIGHT_KG: f64 = 70.0;
pub const FALLBACK_HEIGHT_CM: f64 = 175.0;

/// Profile edit form. Every field may be left blank; blanks fall back to fixed
/// defaults so a quick save always yields a usable profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
    #[serde(default)]
    pub meal_preferences: BTreeSet<String>,
}

impl ProfileForm {
    /// Seeds the form from an existing profile, as the edit screen does.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            age: Some(profile.age),
            sex: Some(profile.sex),
            height: Some(profile.height),
            weight: Some(profile.weight),
            activity_level: Some(profile.activity_level),
            goal: Some(profile.goal),
            meal_preferences: profile.meal_preferences.clone(),
        }
    }

    pub fn set_meal_preference(&mut self, tag: &str, checked: bool) {
        if checked {
            self.meal_preferences.insert(tag.to_string());
        } else {
            self.meal_preferences.remove(tag);
        }
    }

    pub fn into_profile(self) -> Result<Profile, ValidationError> {
        Profile::new(
            self.age.unwrap_or(FALLBACK_AGE),
            self.sex.unwrap_or(Sex::Male),
            self.height.unwrap_or(FALLBACK_HEIGHT_CM),
            self.weight.unwrap_or(FALLBACK_WEIGHT_KG),
            self.activity_level.unwrap_or(ActivityLevel::Moderate),
            self.goal.unwrap_or(Goal::Maintain),
            self.meal_preferences,
        )
    }
}

/// Second registration step. Sex and goal are not asked yet and default to
/// male / maintain until the user edits the profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingForm {
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub exercise_habits: Option<ActivityLevel>,
    #[serde(default)]
    pub health_status: String,
}

impl OnboardingForm {
    /// Returns the profile and the trimmed health status, if any was given.
    pub fn into_profile(self) -> Result<(Profile, Option<String>), ValidationError> {
        let age = self.age.ok_or(ValidationError::MissingField("age"))?;
        let weight = self.weight.ok_or(ValidationError::MissingField("weight"))?;
        let height = self.height.ok_or(ValidationError::MissingField("height"))?;
        let activity = self
            .exercise_habits
            .ok_or(ValidationError::MissingField("exerciseHabits"))?;

        let profile = Profile::new(
            age,
            Sex::Male,
            height,
            weight,
            activity,
            Goal::Maintain,
            BTreeSet::new(),
        )?;

        let health = self.health_status.trim();
        let health = (!health.is_empty()).then(|| health.to_string());
        Ok((profile, health))
    }
}
