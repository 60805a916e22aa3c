use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u32,
    pub name: &'static str,
    pub short_description: &'static str,
    /// Image stem, resolved by [`Recipe::image_path`].
    pub image: &'static str,
    pub main_ingredients: &'static [&'static str],
    pub full_ingredients: &'static [&'static str],
    pub preparation_steps: &'static [&'static str],
    pub health_benefits: &'static [&'static str],
}

impl Recipe {
    pub fn image_path(&self) -> String {
        format!("/{}.png", self.image)
    }
}

pub static RECIPES: [Recipe; 6] = [
    Recipe {
        id: 1,
        name: "Quinoa Power Bowl",
        short_description: "Protein-packed quinoa with roasted vegetables and chickpeas.",
        image: "quinoa-bowl",
        main_ingredients: &["Quinoa", "Chickpeas", "Sweet Potato", "Spinach"],
        full_ingredients: &[
            "1 cup quinoa",
            "1 can chickpeas, drained",
            "1 medium sweet potato, cubed",
            "2 cups baby spinach",
            "2 tbsp olive oil",
            "1 lemon, juiced",
            "Salt and pepper to taste",
        ],
        preparation_steps: &[
            "Cook quinoa according to package instructions.",
            "Roast sweet potato and chickpeas with olive oil at 200C for 25 minutes.",
            "Wilt spinach in a warm pan.",
            "Assemble bowls and dress with lemon juice.",
        ],
        health_benefits: &[
            "Complete plant protein from quinoa",
            "High in fiber",
            "Rich in vitamin A",
        ],
    },
    Recipe {
        id: 2,
        name: "Grilled Salmon with Asparagus",
        short_description: "Omega-3 rich salmon fillet with garlic asparagus.",
        image: "salmon-asparagus",
        main_ingredients: &["Salmon", "Asparagus", "Lemon", "Garlic"],
        full_ingredients: &[
            "2 salmon fillets",
            "1 bunch asparagus",
            "1 lemon, sliced",
            "2 cloves garlic, minced",
            "1 tbsp olive oil",
        ],
        preparation_steps: &[
            "Season salmon with salt, pepper and lemon.",
            "Grill salmon 4-5 minutes per side.",
            "Saute asparagus with garlic and olive oil until tender.",
            "Serve together with lemon slices.",
        ],
        health_benefits: &[
            "Omega-3 fatty acids support heart health",
            "Good source of vitamin D",
            "High-quality protein",
        ],
    },
    Recipe {
        id: 3,
        name: "Chicken and Vegetable Stir-Fry",
        short_description: "Quick stir-fry with lean chicken and crisp vegetables.",
        image: "chicken-stir-fry",
        main_ingredients: &["Chicken Breast", "Broccoli", "Bell Pepper", "Brown Rice"],
        full_ingredients: &[
            "2 chicken breasts, sliced",
            "2 cups broccoli florets",
            "1 red bell pepper, sliced",
            "1 cup brown rice",
            "2 tbsp low-sodium soy sauce",
            "1 tsp grated ginger",
        ],
        preparation_steps: &[
            "Cook brown rice.",
            "Stir-fry chicken until golden, then set aside.",
            "Stir-fry broccoli and pepper for 3-4 minutes.",
            "Return chicken, add soy sauce and ginger, toss and serve over rice.",
        ],
        health_benefits: &[
            "Lean protein for muscle maintenance",
            "Vitamin C from peppers and broccoli",
            "Whole grain carbohydrates",
        ],
    },
    Recipe {
        id: 4,
        name: "Overnight Oats with Berries",
        short_description: "Make-ahead oats soaked in yogurt and topped with fresh berries.",
        image: "overnight-oats",
        main_ingredients: &["Oats", "Greek Yogurt", "Berries", "Chia Seeds"],
        full_ingredients: &[
            "1/2 cup rolled oats",
            "1/2 cup Greek yogurt",
            "1/2 cup milk",
            "1 tbsp chia seeds",
            "1/2 cup mixed berries",
            "1 tsp honey",
        ],
        preparation_steps: &[
            "Mix oats, yogurt, milk and chia seeds in a jar.",
            "Refrigerate overnight.",
            "Top with berries and honey before serving.",
        ],
        health_benefits: &[
            "Slow-release energy",
            "Calcium and protein from yogurt",
            "Antioxidants from berries",
        ],
    },
    Recipe {
        id: 5,
        name: "Lentil and Spinach Soup",
        short_description: "Hearty iron-rich soup with red lentils and greens.",
        image: "lentil-soup",
        main_ingredients: &["Lentils", "Spinach", "Carrot", "Tomato"],
        full_ingredients: &[
            "1 cup red lentils",
            "2 cups spinach",
            "2 carrots, diced",
            "1 can diced tomatoes",
            "1 onion, chopped",
            "4 cups vegetable broth",
            "1 tsp cumin",
        ],
        preparation_steps: &[
            "Saute onion and carrot until soft.",
            "Add lentils, tomatoes, broth and cumin; simmer 20 minutes.",
            "Stir in spinach until wilted.",
        ],
        health_benefits: &[
            "Plant-based iron and protein",
            "High in fiber",
            "Low in fat",
        ],
    },
    Recipe {
        id: 6,
        name: "Avocado Egg Toast",
        short_description: "Whole grain toast with smashed avocado and a poached egg.",
        image: "avocado-toast",
        main_ingredients: &["Avocado", "Egg", "Whole Grain Bread"],
        full_ingredients: &[
            "2 slices whole grain bread",
            "1 ripe avocado",
            "2 eggs",
            "Chili flakes",
            "Salt and pepper",
        ],
        preparation_steps: &[
            "Toast the bread.",
            "Mash avocado with salt and pepper and spread on toast.",
            "Poach eggs for 3 minutes and place on top.",
            "Finish with chili flakes.",
        ],
        health_benefits: &[
            "Healthy monounsaturated fats",
            "Potassium from avocado",
            "Protein and vitamin D from eggs",
        ],
    },
];

pub fn find_recipe(id: u32) -> Option<&'static Recipe> {
    RECIPES.iter().find(|r| r.id == id)
}

/// Comma-separated ingredient search. A recipe matches when any term is a
/// substring of any of its main ingredients. Blank queries return everything.
pub fn search_by_ingredients(query: &str) -> Vec<&'static Recipe> {
    let terms: Vec<String> = query
        .to_lowercase()
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        return RECIPES.iter().collect();
    }

    RECIPES
        .iter()
        .filter(|recipe| {
            terms.iter().any(|term| {
                recipe
                    .main_ingredients
                    .iter()
                    .any(|ingredient| ingredient.to_lowercase().contains(term.as_str()))
            })
        })
        .collect()
}
