use time::OffsetDateTime;

use crate::error::ValidationError;

use super::dto::{MealEntry, MealId, NewMeal};

/// Id from the wall clock, bumped past every id already in `meals`. When the
/// largest id is `i64::MAX` the first free id from the clock onward is used.
pub(crate) fn next_meal_id(meals: &[MealEntry], now: OffsetDateTime) -> MealId {
    let millis = (now.unix_timestamp_nanos() / 1_000_000) as i64;
    let mut id = match meals.iter().map(|m| m.id.0).max() {
        Some(max) => max.checked_add(1).map_or(millis, |next| next.max(millis)),
        None => millis,
    };
    while meals.iter().any(|m| m.id.0 == id) {
        id = id.wrapping_add(1);
    }
    MealId(id)
}

/// Returns a new log with `meal` appended. The input slice is never modified.
pub fn add_meal(meals: &[MealEntry], meal: NewMeal) -> Result<Vec<MealEntry>, ValidationError> {
    add_meal_at(meals, meal, OffsetDateTime::now_utc())
}

pub(crate) fn add_meal_at(
    meals: &[MealEntry],
    meal: NewMeal,
    now: OffsetDateTime,
) -> Result<Vec<MealEntry>, ValidationError> {
    let name = meal.name.trim();
    if name.is_empty() {
        return Err(ValidationError::Empty("meal name"));
    }
    let calories = meal.calories.ok_or(ValidationError::MissingField("calories"))?;
    for (field, grams) in [("protein", meal.protein), ("carbs", meal.carbs), ("fat", meal.fat)] {
        if let Some(g) = grams {
            ValidationError::non_negative(field, g)?;
        }
    }

    let entry = MealEntry {
        id: next_meal_id(meals, now),
        meal_type: meal.meal_type,
        name: name.to_string(),
        calories,
        protein: meal.protein,
        carbs: meal.carbs,
        fat: meal.fat,
    };
    let mut out = Vec::with_capacity(meals.len() + 1);
    out.extend_from_slice(meals);
    out.push(entry);
    Ok(out)
}

/// Returns a new log without the entry `id`. Unknown ids leave the log unchanged.
pub fn remove_meal(meals: &[MealEntry], id: MealId) -> Vec<MealEntry> {
    meals.iter().filter(|m| m.id != id).cloned().collect()
}

pub fn total_calories(meals: &[MealEntry]) -> u64 {
    meals.iter().map(|m| m.calories as u64).sum()
}

pub fn total_protein(meals: &[MealEntry]) -> f64 {
    meals.iter().map(|m| m.protein.unwrap_or(0.0)).sum()
}
