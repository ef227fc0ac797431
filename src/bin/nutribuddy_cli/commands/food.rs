// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Food log commands for nutribuddy-cli
// ABOUTME: Adds entries by hand or from a photo, deletes by id, and lists entries

use crate::helpers::display::display_entry;
use nutribuddy::errors::{AppError, AppResult};
use nutribuddy::session::NutritionSession;
use nutribuddy_core::models::MealType;
use std::fs;
use std::path::Path;
use tracing::info;

/// Log an entry and save
pub async fn add(
    session: &mut NutritionSession,
    name: &str,
    calories: f64,
    meal_type: MealType,
) -> AppResult<()> {
    let entry = session.add_entry(name, calories, meal_type, None)?;
    println!("Logged:");
    display_entry(&entry);
    println!("   Today: {}", session.calorie_balance());
    session.save().await
}

/// Recognize a photo, log the guess, and save
pub async fn add_from_image(
    session: &mut NutritionSession,
    path: &Path,
    meal_type: MealType,
) -> AppResult<()> {
    let image = fs::read(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read image {}", path.display()))
            .with_field("image")
            .with_source(e)
    })?;
    info!("Analyzing {} ({} bytes)", path.display(), image.len());

    let entry = session.add_entry_from_image(&image, meal_type).await?;
    println!("Recognized and logged:");
    display_entry(&entry);
    println!("   Today: {}", session.calorie_balance());
    session.save().await
}

/// Delete an entry by id and save
pub async fn delete(session: &mut NutritionSession, id: &str) -> AppResult<()> {
    if session.delete_entry(id) {
        println!("Deleted entry {id}");
        session.save().await
    } else {
        println!("No entry with id {id}");
        Ok(())
    }
}

/// List today's entries, or every entry with `all`
pub fn list(session: &NutritionSession, all: bool) {
    let entries: Vec<_> = if all {
        session.food_log().entries().iter().collect()
    } else {
        session.todays_entries()
    };

    if entries.is_empty() {
        println!("No food logged yet.");
        return;
    }

    let mut current_date = None;
    for entry in entries {
        if current_date != Some(entry.date) {
            println!("\n{}", entry.date);
            current_date = Some(entry.date);
        }
        display_entry(entry);
    }
    if !all {
        println!("\n   Total: {:.0} kcal, {}", session.todays_calories(), session.calorie_balance());
    }
}
