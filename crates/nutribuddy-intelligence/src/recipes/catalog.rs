// ABOUTME: Built-in recipe catalog data
// ABOUTME: Four static suggestions covering breakfast, lunch, dinner, and snack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutribuddy_core::models::{MealType, Recipe};

struct RecipeSeed {
    id: &'static str,
    name: &'static str,
    calories: u32,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
    prep_time_minutes: u32,
    category: MealType,
}

const SEEDS: &[RecipeSeed] = &[
    RecipeSeed {
        id: "1",
        name: "Quinoa Buddha Bowl",
        calories: 420,
        ingredients: &[
            "1 cup cooked quinoa",
            "1/2 cup chickpeas",
            "1 cup mixed greens",
            "1/2 avocado",
            "1/4 cup shredded carrots",
            "Tahini dressing",
        ],
        instructions: &[
            "Cook quinoa according to package instructions",
            "Roast chickpeas with olive oil and spices",
            "Prepare vegetables and arrange in bowl",
            "Drizzle with tahini dressing",
            "Serve immediately",
        ],
        prep_time_minutes: 25,
        category: MealType::Lunch,
    },
    RecipeSeed {
        id: "2",
        name: "Greek Yogurt Berry Parfait",
        calories: 280,
        ingredients: &[
            "1 cup Greek yogurt",
            "1/2 cup mixed berries",
            "2 tbsp granola",
            "1 tbsp honey",
            "1 tbsp chia seeds",
        ],
        instructions: &[
            "Layer yogurt in a glass",
            "Add berries and granola",
            "Drizzle with honey",
            "Sprinkle chia seeds on top",
            "Serve chilled",
        ],
        prep_time_minutes: 5,
        category: MealType::Breakfast,
    },
    RecipeSeed {
        id: "3",
        name: "Lemon Herb Baked Salmon",
        calories: 340,
        ingredients: &[
            "6 oz salmon fillet",
            "1 lemon (juiced)",
            "2 tbsp olive oil",
            "Fresh herbs (dill, parsley)",
            "Salt and pepper",
            "Steamed broccoli",
        ],
        instructions: &[
            "Preheat oven to 400°F",
            "Season salmon with herbs and lemon",
            "Bake for 12-15 minutes",
            "Steam broccoli until tender",
            "Serve with lemon wedges",
        ],
        prep_time_minutes: 20,
        category: MealType::Dinner,
    },
    RecipeSeed {
        id: "4",
        name: "Energy Ball Bites",
        calories: 150,
        ingredients: &[
            "1 cup dates (pitted)",
            "1/2 cup almonds",
            "2 tbsp cocoa powder",
            "1 tbsp coconut oil",
            "Shredded coconut for rolling",
        ],
        instructions: &[
            "Blend dates and almonds in food processor",
            "Add cocoa powder and coconut oil",
            "Form into small balls",
            "Roll in shredded coconut",
            "Refrigerate for 30 minutes",
        ],
        prep_time_minutes: 15,
        category: MealType::Snack,
    },
];

/// Materialize the built-in catalog in its fixed order
pub(super) fn builtin_recipes() -> Vec<Recipe> {
    SEEDS
        .iter()
        .map(|seed| Recipe {
            id: seed.id.to_owned(),
            name: seed.name.to_owned(),
            calories: seed.calories,
            ingredients: seed.ingredients.iter().map(|&s| s.to_owned()).collect(),
            instructions: seed.instructions.iter().map(|&s| s.to_owned()).collect(),
            prep_time_minutes: seed.prep_time_minutes,
            category: seed.category,
        })
        .collect()
}
