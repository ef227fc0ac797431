// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Recipe listing command for nutribuddy-cli

use crate::helpers::display::display_recipe;
use nutribuddy::session::NutritionSession;
use nutribuddy_core::models::CategoryFilter;

/// List recipes for the profile's diet
pub fn list(session: &NutritionSession, category: CategoryFilter) {
    let recipes = session.recipes(category);
    if recipes.is_empty() {
        println!("No recipes match {category}.");
        return;
    }
    for recipe in recipes {
        display_recipe(recipe);
    }
}
