use serde::Serialize;

use super::dto::{MealType, NewMeal};

/// A pickable food with per-serving nutrition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodItem {
    pub id: u32,
    pub name: &'static str,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl FoodItem {
    pub fn to_new_meal(&self, meal_type: MealType) -> NewMeal {
        NewMeal {
            meal_type,
            name: self.name.to_string(),
            calories: Some(self.calories),
            protein: Some(self.protein),
            carbs: Some(self.carbs),
            fat: Some(self.fat),
        }
    }
}

const fn food(
    id: u32,
    name: &'static str,
    calories: u32,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> FoodItem {
    FoodItem {
        id,
        name,
        calories,
        protein,
        carbs,
        fat,
    }
}

pub static FOOD_DATABASE: [FoodItem; 10] = [
    food(1, "Apple", 95, 0.5, 25.0, 0.3),
    food(2, "Banana", 105, 1.3, 27.0, 0.4),
    food(3, "Chicken Breast", 165, 31.0, 0.0, 3.6),
    food(4, "Salmon", 206, 22.0, 0.0, 13.0),
    food(5, "Brown Rice", 215, 5.0, 45.0, 1.8),
    food(6, "Avocado", 240, 3.0, 12.0, 22.0),
    food(7, "Egg", 78, 6.0, 0.6, 5.0),
    food(8, "Greek Yogurt", 100, 17.0, 6.0, 0.4),
    food(9, "Spinach", 23, 2.9, 3.6, 0.4),
    food(10, "Sweet Potato", 112, 2.0, 26.0, 0.1),
];

pub static RECENT_MEALS: [FoodItem; 5] = [
    food(1, "Oatmeal with Berries", 350, 15.0, 60.0, 7.0),
    food(2, "Grilled Chicken Salad", 450, 40.0, 10.0, 25.0),
    food(3, "Salmon with Quinoa", 550, 35.0, 40.0, 25.0),
    food(4, "Greek Yogurt with Honey", 200, 20.0, 25.0, 5.0),
    food(5, "Protein Smoothie", 300, 25.0, 30.0, 10.0),
];

/// Case-insensitive substring match on the food name. An empty term lists everything.
pub fn search_foods(term: &str) -> Vec<&'static FoodItem> {
    let term = term.trim().to_lowercase();
    FOOD_DATABASE
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&term))
        .collect()
}
