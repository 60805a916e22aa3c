use serde::Serialize;

use crate::{
    exercise::{calculate_exercise_time, ExerciseType, REFERENCE_WEIGHT_KG},
    meals::{
        calculate_macro_percentages, estimate_micronutrients, total_calories, total_protein,
        MacroBreakdown, Micronutrient,
    },
    profile::recommend_protein_intake,
    session::Session,
    water::water_target,
};

/// Calorie target shown before a profile exists.
pub const DEFAULT_CALORIE_TARGET: i64 = 2000;
pub const DEFAULT_PROTEIN_TARGET_G: i64 = 100;

/// Minutes of one activity needed to burn the day's excess calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSuggestion {
    pub exercise: ExerciseType,
    pub minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub calories_consumed: u64,
    pub calorie_target: i64,
    pub calories_remaining: i64,
    pub calorie_percentage: u32,
    pub water_consumed: f64,
    pub water_target: f64,
    pub water_percentage: u32,
    pub protein_consumed: f64,
    pub protein_target: i64,
    pub protein_percentage: u32,
    pub excess_calories: i64,
    pub exercise: Vec<ExerciseSuggestion>,
    pub macros: MacroBreakdown,
    pub micronutrients: Vec<Micronutrient>,
}

const SUGGESTED_EXERCISES: [ExerciseType; 3] = [
    ExerciseType::Walking,
    ExerciseType::Running,
    ExerciseType::Cycling,
];

fn capped_percentage(consumed: f64, target: f64) -> u32 {
    if target <= 0.0 {
        return 0;
    }
    ((consumed / target) * 100.0).round().clamp(0.0, 100.0) as u32
}

impl DashboardSummary {
    pub fn from_session(session: &Session) -> Self {
        let profile = session.profile.as_ref();

        let calories_consumed = total_calories(&session.meals);
        let calorie_target = profile
            .map(|p| p.daily_calorie_target)
            .filter(|t| *t > 0)
            .unwrap_or(DEFAULT_CALORIE_TARGET);
        let consumed = calories_consumed as i64;

        let water_target = water_target(profile);
        let protein_target = profile
            .and_then(|p| recommend_protein_intake(p.weight, p.goal).ok())
            .unwrap_or(DEFAULT_PROTEIN_TARGET_G);
        let protein_consumed = total_protein(&session.meals);

        let excess_calories = (consumed - calorie_target).max(0);
        let exercise = if excess_calories > 0 {
            SUGGESTED_EXERCISES
                .into_iter()
                .map(|exercise| ExerciseSuggestion {
                    exercise,
                    // excess is finite and positive, the reference weight is fixed
                    minutes: calculate_exercise_time(
                        excess_calories as f64,
                        exercise,
                        REFERENCE_WEIGHT_KG,
                    )
                    .unwrap_or(0),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            calories_consumed,
            calorie_target,
            calories_remaining: (calorie_target - consumed).max(0),
            calorie_percentage: capped_percentage(consumed as f64, calorie_target as f64),
            water_consumed: session.water.liters(),
            water_target,
            water_percentage: session.water.progress(water_target),
            protein_consumed,
            protein_target,
            protein_percentage: capped_percentage(protein_consumed, protein_target as f64),
            excess_calories,
            exercise,
            macros: calculate_macro_percentages(&session.meals),
            micronutrients: estimate_micronutrients(&session.meals),
        }
    }
}
