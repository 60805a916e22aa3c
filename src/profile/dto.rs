use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::calorie::calculate_daily_calorie_target;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    /// Calorie adjustment in percent of TDEE.
    pub fn calorie_adjustment_pct(self) -> f64 {
        match self {
            Goal::Lose => -20.0,
            Goal::Maintain => 0.0,
            Goal::Gain => 15.0,
        }
    }

    /// Protein recommendation in g per kg of body weight.
    pub fn protein_g_per_kg(self) -> f64 {
        match self {
            Goal::Lose => 2.0,
            Goal::Maintain => 1.6,
            Goal::Gain => 1.8,
        }
    }
}

/// Biometric profile. Replaced wholesale on every edit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub age: u32,
    pub sex: Sex,
    pub height: f64, // cm
    pub weight: f64, // kg
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[serde(default)]
    pub meal_preferences: BTreeSet<String>,
    pub daily_calorie_target: i64,
}

impl Profile {
    /// Builds a profile with the calorie target derived from the other fields.
    pub fn new(
        age: u32,
        sex: Sex,
        height: f64,
        weight: f64,
        activity_level: ActivityLevel,
        goal: Goal,
        meal_preferences: BTreeSet<String>,
    ) -> Result<Self, ValidationError> {
        let daily_calorie_target =
            calculate_daily_calorie_target(weight, height, age as f64, sex, activity_level, goal)?;
        Ok(Self {
            age,
            sex,
            height,
            weight,
            activity_level,
            goal,
            meal_preferences,
            daily_calorie_target,
        })
    }

    pub fn recompute_target(&mut self) -> Result<i64, ValidationError> {
        self.daily_calorie_target = calculate_daily_calorie_target(
            self.weight,
            self.height,
            self.age as f64,
            self.sex,
            self.activity_level,
            self.goal,
        )?;
        Ok(self.daily_calorie_target)
    }
}
