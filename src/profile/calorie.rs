//! Energy and intake recommendations derived from a biometric profile.

use crate::error::ValidationError;

use super::dto::{ActivityLevel, Goal, Sex};

/// Water recommendation per kg of body weight, in millilitres.
pub const WATER_ML_PER_KG: f64 = 33.0;

/// Basal metabolic rate, Mifflin-St Jeor.
pub fn calculate_bmr(weight: f64, height: f64, age: f64, sex: Sex) -> Result<f64, ValidationError> {
    let weight = ValidationError::positive("weight", weight)?;
    let height = ValidationError::positive("height", height)?;
    let age = ValidationError::positive("age", age)?;

    let base = 10.0 * weight + 6.25 * height - 5.0 * age;
    Ok(match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    })
}

pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> Result<f64, ValidationError> {
    let bmr = ValidationError::finite("bmr", bmr)?;
    Ok(bmr * activity_level.multiplier())
}

pub fn calculate_daily_calorie_target(
    weight: f64,
    height: f64,
    age: f64,
    sex: Sex,
    activity_level: ActivityLevel,
    goal: Goal,
) -> Result<i64, ValidationError> {
    let bmr = calculate_bmr(weight, height, age, sex)?;
    let tdee = calculate_tdee(bmr, activity_level)?;
    let adjustment = tdee * (goal.calorie_adjustment_pct() / 100.0);
    Ok((tdee + adjustment).round() as i64)
}

/// Daily water in litres, one decimal.
pub fn recommend_water_intake(weight: f64) -> Result<f64, ValidationError> {
    let weight = ValidationError::positive("weight", weight)?;
    Ok(((weight * WATER_ML_PER_KG / 1000.0) * 10.0).round() / 10.0)
}

/// Daily protein in grams.
pub fn recommend_protein_intake(weight: f64, goal: Goal) -> Result<i64, ValidationError> {
    let weight = ValidationError::positive("weight", weight)?;
    Ok((weight * goal.protein_g_per_kg()).round() as i64)
}

#[cfg(test)]
mod calorie_tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bmr_matches_reference_values() {
        assert_eq!(calculate_bmr(70.0, 175.0, 25.0, Sex::Male).unwrap(), 1673.75);
        assert_eq!(calculate_bmr(70.0, 175.0, 25.0, Sex::Female).unwrap(), 1507.75);
        assert_eq!(calculate_bmr(70.0, 175.0, 30.0, Sex::Male).unwrap(), 1648.75);
        assert_eq!(calculate_bmr(70.0, 175.0, 30.0, Sex::Female).unwrap(), 1482.75);
    }

    #[test]
    fn bmr_is_linear_in_each_input() {
        let base = calculate_bmr(70.0, 175.0, 30.0, Sex::Male).unwrap();
        assert_eq!(calculate_bmr(71.0, 175.0, 30.0, Sex::Male).unwrap() - base, 10.0);
        assert_eq!(calculate_bmr(70.0, 176.0, 30.0, Sex::Male).unwrap() - base, 6.25);
        assert_eq!(calculate_bmr(70.0, 175.0, 31.0, Sex::Male).unwrap() - base, -5.0);
        let female = calculate_bmr(70.0, 175.0, 30.0, Sex::Female).unwrap();
        assert_eq!(base - female, 166.0);
    }

    #[test]
    fn bmr_rejects_invalid_inputs() {
        assert!(matches!(
            calculate_bmr(0.0, 175.0, 30.0, Sex::Male),
            Err(ValidationError::NonPositive { field: "weight", .. })
        ));
        assert!(matches!(
            calculate_bmr(70.0, -175.0, 30.0, Sex::Male),
            Err(ValidationError::NonPositive { field: "height", .. })
        ));
        assert_eq!(
            calculate_bmr(70.0, 175.0, f64::INFINITY, Sex::Female),
            Err(ValidationError::NotFinite { field: "age" })
        );
    }

    #[test]
    fn tdee_uses_fixed_multipliers() {
        assert!(approx(calculate_tdee(1000.0, ActivityLevel::Sedentary).unwrap(), 1200.0));
        assert!(approx(calculate_tdee(1000.0, ActivityLevel::Light).unwrap(), 1375.0));
        assert!(approx(calculate_tdee(1000.0, ActivityLevel::Moderate).unwrap(), 1550.0));
        assert!(approx(calculate_tdee(1000.0, ActivityLevel::Active).unwrap(), 1725.0));
        assert!(approx(calculate_tdee(1000.0, ActivityLevel::VeryActive).unwrap(), 1900.0));
        assert!(calculate_tdee(f64::NAN, ActivityLevel::Light).is_err());
    }

    #[test]
    fn daily_target_reference_case() {
        let bmr = calculate_bmr(70.0, 175.0, 25.0, Sex::Male).unwrap();
        let tdee = calculate_tdee(bmr, ActivityLevel::Moderate).unwrap();
        assert!(approx(tdee, 2594.3125));
        let target = calculate_daily_calorie_target(
            70.0,
            175.0,
            25.0,
            Sex::Male,
            ActivityLevel::Moderate,
            Goal::Maintain,
        )
        .unwrap();
        assert_eq!(target, 2594);

        // 1648.75 * 1.55 = 2555.5625
        let at_thirty = calculate_daily_calorie_target(
            70.0,
            175.0,
            30.0,
            Sex::Male,
            ActivityLevel::Moderate,
            Goal::Maintain,
        )
        .unwrap();
        assert_eq!(at_thirty, 2556);
    }

    #[test]
    fn daily_target_applies_goal_adjustment() {
        let lose = calculate_daily_calorie_target(
            70.0,
            175.0,
            25.0,
            Sex::Male,
            ActivityLevel::Moderate,
            Goal::Lose,
        )
        .unwrap();
        // 2594.3125 * 0.8 = 2075.45
        assert_eq!(lose, 2075);
        let gain = calculate_daily_calorie_target(
            70.0,
            175.0,
            25.0,
            Sex::Male,
            ActivityLevel::Moderate,
            Goal::Gain,
        )
        .unwrap();
        // 2594.3125 * 1.15 = 2983.459375
        assert_eq!(gain, 2983);
    }

    #[test]
    fn water_and_protein_recommendations() {
        assert_eq!(recommend_water_intake(70.0).unwrap(), 2.3);
        assert_eq!(recommend_water_intake(80.0).unwrap(), 2.6);
        assert_eq!(recommend_protein_intake(70.0, Goal::Maintain).unwrap(), 112);
        assert_eq!(recommend_protein_intake(70.0, Goal::Lose).unwrap(), 140);
        assert_eq!(recommend_protein_intake(70.0, Goal::Gain).unwrap(), 126);
        assert!(recommend_water_intake(-1.0).is_err());
    }
}
