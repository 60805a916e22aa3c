pub mod catalog;
mod dto;
pub mod nutrition;
mod services;

pub use dto::{MealEntry, MealId, MealType, NewMeal};
pub use nutrition::{
    calculate_macro_percentages, calculate_macro_targets, estimate_micronutrients, MacroAmount,
    MacroBreakdown, MacroTargets, Micronutrient,
};
pub use services::{add_meal, remove_meal, total_calories, total_protein};
