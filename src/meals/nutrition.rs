//! Macro and micronutrient aggregation over a day's meal log.

use serde::Serialize;

use crate::{error::ValidationError, profile::Goal};

use super::dto::MealEntry;

pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentRange {
    pub min: u32,
    pub target: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroRanges {
    pub protein: PercentRange,
    pub carbs: PercentRange,
    pub fat: PercentRange,
}

/// Recommended share of daily calories per macro, in percent.
pub const RECOMMENDED_MACRO_RANGES: MacroRanges = MacroRanges {
    protein: PercentRange { min: 10, target: 20, max: 35 },
    carbs: PercentRange { min: 45, target: 50, max: 65 },
    fat: PercentRange { min: 20, target: 30, max: 35 },
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTarget {
    pub key: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Reference absolute daily intakes. Informational; the estimator below works in percent.
pub const DAILY_MICRONUTRIENT_TARGETS: [DailyTarget; 10] = [
    DailyTarget { key: "vitaminA", value: 900.0, unit: "mcg" },
    DailyTarget { key: "vitaminC", value: 90.0, unit: "mg" },
    DailyTarget { key: "vitaminD", value: 15.0, unit: "mcg" },
    DailyTarget { key: "vitaminE", value: 15.0, unit: "mg" },
    DailyTarget { key: "calcium", value: 1000.0, unit: "mg" },
    DailyTarget { key: "iron", value: 8.0, unit: "mg" },
    DailyTarget { key: "potassium", value: 3400.0, unit: "mg" },
    DailyTarget { key: "magnesium", value: 400.0, unit: "mg" },
    DailyTarget { key: "zinc", value: 11.0, unit: "mg" },
    DailyTarget { key: "fiber", value: 30.0, unit: "g" },
];

/// Gram targets per macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MacroTargets {
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

pub fn calculate_macro_targets(
    total_calories: f64,
    goal: Goal,
) -> Result<MacroTargets, ValidationError> {
    let total_calories = ValidationError::non_negative("total_calories", total_calories)?;
    let (protein_pct, carbs_pct, fat_pct) = match goal {
        Goal::Lose => (30.0, 40.0, 30.0),
        Goal::Gain => (25.0, 55.0, 20.0),
        Goal::Maintain => (
            RECOMMENDED_MACRO_RANGES.protein.target as f64,
            RECOMMENDED_MACRO_RANGES.carbs.target as f64,
            RECOMMENDED_MACRO_RANGES.fat.target as f64,
        ),
    };

    let grams = |pct: f64, kcal_per_gram: f64| {
        (total_calories * (pct / 100.0) / kcal_per_gram).round() as i64
    };
    Ok(MacroTargets {
        protein: grams(protein_pct, PROTEIN_KCAL_PER_GRAM),
        carbs: grams(carbs_pct, CARBS_KCAL_PER_GRAM),
        fat: grams(fat_pct, FAT_KCAL_PER_GRAM),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroAmount {
    pub grams: f64,
    pub percentage: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroBreakdown {
    pub protein: MacroAmount,
    pub carbs: MacroAmount,
    pub fat: MacroAmount,
}

/// Sums logged macros and expresses each as a share of logged calories.
pub fn calculate_macro_percentages(meals: &[MealEntry]) -> MacroBreakdown {
    let mut calories = 0.0;
    let (mut protein, mut carbs, mut fat) = (0.0, 0.0, 0.0);
    for meal in meals {
        calories += meal.calories as f64;
        protein += meal.protein.unwrap_or(0.0);
        carbs += meal.carbs.unwrap_or(0.0);
        fat += meal.fat.unwrap_or(0.0);
    }

    let share = |grams: f64, kcal_per_gram: f64| {
        if calories > 0.0 {
            ((grams * kcal_per_gram / calories) * 100.0).round() as i64
        } else {
            0
        }
    };

    MacroBreakdown {
        protein: MacroAmount {
            grams: protein,
            percentage: share(protein, PROTEIN_KCAL_PER_GRAM),
        },
        carbs: MacroAmount {
            grams: carbs,
            percentage: share(carbs, CARBS_KCAL_PER_GRAM),
        },
        fat: MacroAmount {
            grams: fat,
            percentage: share(fat, FAT_KCAL_PER_GRAM),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Micronutrient {
    pub name: &'static str,
    pub value: u32,
    pub target: u32,
    pub unit: &'static str,
}

struct KeywordRule {
    name: &'static str,
    keywords: &'static [&'static str],
    points: u32,
}

// Rough keyword heuristic, not a food database. Order is the output order.
const MICRONUTRIENT_RULES: [KeywordRule; 7] = [
    KeywordRule { name: "Vitamin A", keywords: &["carrot", "sweet potato", "spinach"], points: 25 },
    KeywordRule { name: "Vitamin C", keywords: &["orange", "berry", "pepper"], points: 20 },
    KeywordRule { name: "Vitamin D", keywords: &["salmon", "egg", "mushroom"], points: 15 },
    KeywordRule { name: "Calcium", keywords: &["milk", "yogurt", "cheese"], points: 20 },
    KeywordRule { name: "Iron", keywords: &["beef", "spinach", "lentil"], points: 15 },
    KeywordRule { name: "Potassium", keywords: &["banana", "potato", "avocado"], points: 15 },
    KeywordRule { name: "Fiber", keywords: &["oat", "bean", "fruit"], points: 20 },
];

const MICRONUTRIENT_CAP: u32 = 100;

/// Percent-of-daily-target estimates from meal names, capped at 100.
pub fn estimate_micronutrients(meals: &[MealEntry]) -> Vec<Micronutrient> {
    let mut values = [0u32; MICRONUTRIENT_RULES.len()];
    for meal in meals {
        let name = meal.name.to_lowercase();
        for (value, rule) in values.iter_mut().zip(MICRONUTRIENT_RULES.iter()) {
            if rule.keywords.iter().any(|k| name.contains(k)) {
                *value += rule.points;
            }
        }
    }

    MICRONUTRIENT_RULES
        .iter()
        .zip(values)
        .map(|(rule, value)| Micronutrient {
            name: rule.name,
            value: value.min(MICRONUTRIENT_CAP),
            target: 100,
            unit: "%",
        })
        .collect()
}

#[cfg(test)]
mod nutrition_tests {
    use super::*;
    use crate::meals::dto::{MealId, MealType};

    fn meal(name: &str, calories: u32, macros: Option<(f64, f64, f64)>) -> MealEntry {
        MealEntry {
            id: MealId(calories as i64),
            meal_type: MealType::Lunch,
            name: name.to_string(),
            calories,
            protein: macros.map(|m| m.0),
            carbs: macros.map(|m| m.1),
            fat: macros.map(|m| m.2),
        }
    }

    #[test]
    fn macro_targets_per_goal() {
        assert_eq!(
            calculate_macro_targets(2000.0, Goal::Maintain),
            Ok(MacroTargets { protein: 100, carbs: 250, fat: 67 })
        );
        assert_eq!(
            calculate_macro_targets(2000.0, Goal::Lose),
            Ok(MacroTargets { protein: 150, carbs: 200, fat: 67 })
        );
        assert_eq!(
            calculate_macro_targets(2000.0, Goal::Gain),
            Ok(MacroTargets { protein: 125, carbs: 275, fat: 44 })
        );
        assert_eq!(
            calculate_macro_targets(0.0, Goal::Maintain),
            Ok(MacroTargets { protein: 0, carbs: 0, fat: 0 })
        );
    }

    #[test]
    fn macro_targets_reject_bad_totals() {
        assert_eq!(
            calculate_macro_targets(-2000.0, Goal::Maintain),
            Err(ValidationError::Negative { field: "total_calories", value: -2000.0 })
        );
        for total in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                calculate_macro_targets(total, Goal::Gain),
                Err(ValidationError::NotFinite { field: "total_calories" })
            );
        }
    }

    #[test]
    fn empty_log_yields_zeros() {
        let b = calculate_macro_percentages(&[]);
        for m in [b.protein, b.carbs, b.fat] {
            assert_eq!(m.grams, 0.0);
            assert_eq!(m.percentage, 0);
        }
    }

    #[test]
    fn percentages_are_shares_of_logged_calories() {
        let meals = vec![
            meal("Grilled Chicken Salad", 450, Some((40.0, 10.0, 25.0))),
            meal("Custom soup", 150, None),
        ];
        let b = calculate_macro_percentages(&meals);
        assert_eq!(b.protein.grams, 40.0);
        // 160 / 600
        assert_eq!(b.protein.percentage, 27);
        // 40 / 600
        assert_eq!(b.carbs.percentage, 7);
        // 225 / 600
        assert_eq!(b.fat.percentage, 38);
    }

    #[test]
    fn macros_without_calories_stay_zero_percent() {
        let meals = vec![meal("Water", 0, Some((1.0, 1.0, 1.0)))];
        let b = calculate_macro_percentages(&meals);
        assert_eq!(b.fat.grams, 1.0);
        assert_eq!(b.fat.percentage, 0);
    }

    #[test]
    fn micronutrients_follow_keyword_table() {
        let meals = vec![
            meal("Spinach omelette with EGG", 300, None),
            meal("Sweet Potato fries", 400, None),
        ];
        let m = estimate_micronutrients(&meals);
        let names: Vec<_> = m.iter().map(|n| n.name).collect();
        assert_eq!(
            names,
            vec!["Vitamin A", "Vitamin C", "Vitamin D", "Calcium", "Iron", "Potassium", "Fiber"]
        );
        // spinach + sweet potato
        assert_eq!(m[0].value, 50);
        assert_eq!(m[1].value, 0);
        // egg
        assert_eq!(m[2].value, 15);
        // spinach
        assert_eq!(m[4].value, 15);
        // "sweet potato" contains "potato"
        assert_eq!(m[5].value, 15);
        assert!(m.iter().all(|n| n.target == 100 && n.unit == "%"));
    }

    #[test]
    fn every_keyword_scores_its_category() {
        let table = [
            ("carrot", 0, 25),
            ("sweet potato", 0, 25),
            ("spinach", 0, 25),
            ("orange", 1, 20),
            ("berry", 1, 20),
            ("pepper", 1, 20),
            ("salmon", 2, 15),
            ("egg", 2, 15),
            ("mushroom", 2, 15),
            ("milk", 3, 20),
            ("yogurt", 3, 20),
            ("cheese", 3, 20),
            ("beef", 4, 15),
            ("spinach", 4, 15),
            ("lentil", 4, 15),
            ("banana", 5, 15),
            ("potato", 5, 15),
            ("avocado", 5, 15),
            ("oat", 6, 20),
            ("bean", 6, 20),
            ("fruit", 6, 20),
        ];
        for (keyword, category, points) in table {
            let m = estimate_micronutrients(&[meal(&keyword.to_uppercase(), 100, None)]);
            assert_eq!(m[category].value, points, "{keyword} -> {}", m[category].name);
        }

        // keywords that belong to one category only leave the others at zero
        let m = estimate_micronutrients(&[meal("Cheese", 100, None)]);
        let values: Vec<_> = m.iter().map(|n| n.value).collect();
        assert_eq!(values, vec![0, 0, 0, 20, 0, 0, 0]);
    }

    #[test]
    fn micronutrients_cap_at_100() {
        let meals: Vec<_> = (0..10).map(|_| meal("Carrot cake", 350, None)).collect();
        let m = estimate_micronutrients(&meals);
        assert_eq!(m[0].value, 100);
    }

    #[test]
    fn category_counts_once_per_meal() {
        let meals = vec![meal("Orange and berry pepper salad", 200, None)];
        assert_eq!(estimate_micronutrients(&meals)[1].value, 20);
    }
}
