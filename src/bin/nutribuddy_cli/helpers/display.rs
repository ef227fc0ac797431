// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for nutribuddy-cli
// ABOUTME: Provides consistent display functions for profiles, entries, water, recipes, and summaries

use nutribuddy::dashboard::{DailySummary, ProgressMetric, ProgressStatus};
use nutribuddy::ledger::water;
use nutribuddy_core::models::{ChatMessage, ChatRole, FoodEntry, Recipe, UserProfile, WaterIntake};
use nutribuddy_intelligence::DailyEnergyEstimate;

const BAR_WIDTH: usize = 30;

/// Display the saved profile
pub fn display_profile(profile: &UserProfile) {
    println!("\nProfile");
    println!("{}", "=".repeat(50));
    println!("   Name: {}", profile.name);
    println!("   Age: {}", profile.age);
    println!("   Gender: {}", profile.gender);
    println!("   Height: {} cm", profile.height_cm);
    println!("   Weight: {} kg", profile.weight_kg);
    println!("   Target Weight: {} kg", profile.target_weight_kg);
    println!("   Diet: {}", profile.diet_type);
    println!("   Activity: {}", profile.activity_level);
    println!("   Daily Calorie Goal: {} kcal", profile.daily_calorie_goal);
}

/// Display a BMR/TDEE estimate next to the declared goal
pub fn display_estimate(estimate: &DailyEnergyEstimate, declared_goal: u32) {
    println!("\nDaily Energy Estimate");
    println!("{}", "=".repeat(50));
    println!("   BMR: {:.1} kcal", estimate.bmr);
    println!("   TDEE: {:.1} kcal", estimate.tdee);
    println!("   Calculated Goal: {} kcal", estimate.daily_calorie_goal);
    println!("   Current Goal: {declared_goal} kcal");
}

/// Display one food entry on a single line
pub fn display_entry(entry: &FoodEntry) {
    let photo = if entry.image_reference.is_some() {
        " [photo]"
    } else {
        ""
    };
    println!(
        "   {}  {:<9} {:<28} {:>7.0} kcal  {}{photo}",
        entry.timestamp.format("%H:%M"),
        entry.meal_type,
        entry.food_name,
        entry.calories,
        entry.id,
    );
}

/// Display today's water record with a progress bar
pub fn display_water(intake: &WaterIntake) {
    println!("\nWater Intake ({})", intake.last_update);
    println!("{}", "=".repeat(50));
    println!(
        "   {} / {} glasses  {}  {:.0}%",
        intake.glasses,
        intake.goal,
        progress_bar(water::display_percent(intake)),
        water::progress_percent(intake),
    );
    if water::is_goal_reached(intake) {
        println!("   Daily goal reached!");
    }
}

/// Display one recipe with its ingredients and steps
pub fn display_recipe(recipe: &Recipe) {
    println!("\n{} ({})", recipe.name, recipe.category);
    println!("{}", "-".repeat(50));
    println!(
        "   {} kcal, {} min prep",
        recipe.calories, recipe.prep_time_minutes
    );
    println!("   Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("   • {ingredient}");
    }
    println!("   Instructions:");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("   {}. {instruction}", step + 1);
    }
}

/// Display a chat message with its speaker
pub fn display_message(message: &ChatMessage) {
    let speaker = match message.role {
        ChatRole::User => "You",
        ChatRole::Assistant => "NutriBuddy",
    };
    println!("\n{speaker}:");
    println!("{}", message.content);
}

/// Display the daily dashboard
pub fn display_summary(summary: &DailySummary) {
    println!("\n{}", summary.greeting);
    println!("{}", "=".repeat(50));
    println!("   Date: {}", summary.date);
    display_metric("Calories", &summary.calories);
    display_metric("Water", &summary.water);
    display_metric("Meals", &summary.meals);
    println!("   Balance: {}", summary.balance);

    if let Some(warning) = summary.calorie_warning() {
        println!("\n{warning}");
    }

    if !summary.entries.is_empty() {
        println!("\nToday's Entries:");
        for entry in &summary.entries {
            display_entry(entry);
        }
    }
}

fn display_metric(label: &str, metric: &ProgressMetric) {
    let status = match metric.status {
        ProgressStatus::OnTrack => "on track",
        ProgressStatus::Approaching => "approaching goal",
        ProgressStatus::Exceeded => "goal exceeded",
    };
    println!(
        "   {label:<9} {:>7.0} / {:<6.0} {}  {:.0}% ({status})",
        metric.value,
        metric.goal,
        progress_bar(metric.display_percent()),
        metric.percent,
    );
}

fn progress_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH.saturating_sub(filled))
    )
}
