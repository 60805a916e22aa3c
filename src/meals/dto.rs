use std::fmt;

use serde::{Deserialize, Serialize};

/// Millisecond timestamp at creation, bumped when needed to stay unique in a log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct MealId(pub i64);

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Known meal slots, or any free label the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Other(String),
}

impl MealType {
    pub const SLOTS: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn label(&self) -> &str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
            MealType::Other(s) => s,
        }
    }
}

impl From<String> for MealType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Breakfast" => MealType::Breakfast,
            "Lunch" => MealType::Lunch,
            "Dinner" => MealType::Dinner,
            "Snack" => MealType::Snack,
            _ => MealType::Other(s),
        }
    }
}

impl From<MealType> for String {
    fn from(t: MealType) -> Self {
        match t {
            MealType::Other(s) => s,
            known => known.label().to_string(),
        }
    }
}

/// One logged food or meal for today.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    pub id: MealId,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: String,
    pub calories: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
}

/// A meal about to be logged; the id is assigned on insert.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewMeal {
    #[serde(rename = "type", default)]
    pub meal_type: MealType,
    pub name: String,
    pub calories: Option<u32>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
}
