pub mod calorie;
mod dto;
mod services;

pub use calorie::{
    calculate_bmr, calculate_daily_calorie_target, calculate_tdee, recommend_protein_intake,
    recommend_water_intake,
};
pub use dto::{ActivityLevel, Goal, Profile, Sex};
pub use services::{
    OnboardingForm, ProfileForm, FALLBACK_AGE, FALLBACK_HEIGHT_CM, FALLBACK_WEIGHT_KG,
};
