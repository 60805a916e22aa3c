//! Conversions between calories and minutes of exercise.
//!
//! Burn rates are kcal per minute for a 70 kg reference body and scale
//! linearly with body weight.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const REFERENCE_WEIGHT_KG: f64 = 70.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Walking,
    Running,
    Cycling,
    Swimming,
    Yoga,
    Weightlifting,
    Hiit,
    Dancing,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 8] = [
        ExerciseType::Walking,
        ExerciseType::Running,
        ExerciseType::Cycling,
        ExerciseType::Swimming,
        ExerciseType::Yoga,
        ExerciseType::Weightlifting,
        ExerciseType::Hiit,
        ExerciseType::Dancing,
    ];

    /// kcal/min at the reference body weight.
    pub fn base_rate(self) -> f64 {
        match self {
            ExerciseType::Walking => 4.5,
            ExerciseType::Running => 10.0,
            ExerciseType::Cycling => 8.0,
            ExerciseType::Swimming => 9.0,
            ExerciseType::Yoga => 3.0,
            ExerciseType::Weightlifting => 5.0,
            ExerciseType::Hiit => 12.0,
            ExerciseType::Dancing => 6.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExerciseType::Walking => "walking",
            ExerciseType::Running => "running",
            ExerciseType::Cycling => "cycling",
            ExerciseType::Swimming => "swimming",
            ExerciseType::Yoga => "yoga",
            ExerciseType::Weightlifting => "weightlifting",
            ExerciseType::Hiit => "hiit",
            ExerciseType::Dancing => "dancing",
        }
    }

    /// Unknown names fall back to walking.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == name)
            .unwrap_or(ExerciseType::Walking)
    }

    fn rate_for(self, weight: f64) -> Result<f64, ValidationError> {
        let weight = ValidationError::positive("weight", weight)?;
        Ok(self.base_rate() * (weight / REFERENCE_WEIGHT_KG))
    }
}

impl From<&str> for ExerciseType {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

/// Minutes needed to burn `calories`. Zero for non-positive calories.
pub fn calculate_exercise_time(
    calories: f64,
    exercise: impl Into<ExerciseType>,
    weight: f64,
) -> Result<i64, ValidationError> {
    let calories = ValidationError::finite("calories", calories)?;
    if calories <= 0.0 {
        return Ok(0);
    }
    let rate = exercise.into().rate_for(weight)?;
    Ok((calories / rate).round() as i64)
}

/// Calories burned over `minutes`. Zero for non-positive durations.
pub fn calculate_calories_burned(
    minutes: f64,
    exercise: impl Into<ExerciseType>,
    weight: f64,
) -> Result<i64, ValidationError> {
    let minutes = ValidationError::finite("minutes", minutes)?;
    if minutes <= 0.0 {
        return Ok(0);
    }
    let rate = exercise.into().rate_for(weight)?;
    Ok((rate * minutes).round() as i64)
}
