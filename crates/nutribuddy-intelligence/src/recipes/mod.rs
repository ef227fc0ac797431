// ABOUTME: Recipe catalog lookup filtered by diet preference and category
// ABOUTME: Vegetarian listings drop recipes whose name or ingredients mention meat or fish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod catalog;

use nutribuddy_core::models::{CategoryFilter, DietType, Recipe};
use std::iter;

/// Keywords marking a recipe as containing meat or fish
pub const MEAT_OR_FISH_KEYWORDS: [&str; 10] = [
    "salmon", "fish", "meat", "chicken", "beef", "pork", "tuna", "shrimp", "turkey", "bacon",
];

/// Whether the recipe's name or any ingredient mentions meat or fish
#[must_use]
pub fn contains_meat_or_fish(recipe: &Recipe) -> bool {
    iter::once(&recipe.name)
        .chain(recipe.ingredients.iter())
        .map(|text| text.to_lowercase())
        .any(|text| MEAT_OR_FISH_KEYWORDS.iter().any(|kw| text.contains(kw)))
}

/// Read-only recipe catalog
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RecipeCatalog {
    /// The built-in four-recipe catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            recipes: catalog::builtin_recipes(),
        }
    }

    /// Catalog over caller-supplied recipes
    #[must_use]
    pub const fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Every recipe in catalog order
    #[must_use]
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes suitable for `diet_type` in `category`, in catalog order
    #[must_use]
    pub fn list(&self, diet_type: DietType, category: CategoryFilter) -> Vec<&Recipe> {
        let listed: Vec<&Recipe> = self
            .recipes
            .iter()
            .filter(|recipe| diet_type != DietType::Vegetarian || !contains_meat_or_fish(recipe))
            .filter(|recipe| category.matches(recipe.category))
            .collect();

        tracing::debug!(
            diet = %diet_type,
            category = %category,
            count = listed.len(),
            "Listed recipes"
        );
        listed
    }
}

/// Filter the built-in catalog
#[must_use]
pub fn list_recipes(diet_type: DietType, category: CategoryFilter) -> Vec<Recipe> {
    RecipeCatalog::builtin()
        .list(diet_type, category)
        .into_iter()
        .cloned()
        .collect()
}
