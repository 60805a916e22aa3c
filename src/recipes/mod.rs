mod catalog;

pub use catalog::{find_recipe, search_by_ingredients, Recipe, RECIPES};
