// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Profile commands for nutribuddy-cli
// ABOUTME: Merges partial updates into the saved profile and reports the calculated goal

use crate::helpers::display::{display_estimate, display_profile};
use nutribuddy::errors::AppResult;
use nutribuddy::session::NutritionSession;
use nutribuddy_core::models::{ActivityLevel, DietType, Gender, UserProfile};
use tracing::info;

/// Fields given on the command line; `None` keeps the current value
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub target_weight_kg: Option<f64>,
    pub diet_type: Option<DietType>,
    pub activity_level: Option<ActivityLevel>,
    pub daily_calorie_goal: Option<u32>,
}

impl ProfileUpdate {
    fn apply_to(self, mut profile: UserProfile) -> UserProfile {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(age) = self.age {
            profile.age = age;
        }
        if let Some(gender) = self.gender {
            profile.gender = gender;
        }
        if let Some(height_cm) = self.height_cm {
            profile.height_cm = height_cm;
        }
        if let Some(weight_kg) = self.weight_kg {
            profile.weight_kg = weight_kg;
        }
        if let Some(target_weight_kg) = self.target_weight_kg {
            profile.target_weight_kg = target_weight_kg;
        }
        if let Some(diet_type) = self.diet_type {
            profile.diet_type = diet_type;
        }
        if let Some(activity_level) = self.activity_level {
            profile.activity_level = activity_level;
        }
        if let Some(goal) = self.daily_calorie_goal {
            profile.daily_calorie_goal = goal;
        }
        profile
    }
}

/// Create or update the profile and save it
pub async fn set(session: &mut NutritionSession, update: ProfileUpdate) -> AppResult<()> {
    let current = session.profile().cloned().unwrap_or_default();
    let saved = session.save_profile(update.apply_to(current))?;
    info!("Saved profile for {}", saved.name);
    display_profile(saved);
    session.save().await
}

/// Show the saved profile
pub fn show(session: &NutritionSession) {
    match session.profile() {
        Some(profile) => display_profile(profile),
        None => println!("No profile yet. Create one with `nutribuddy-cli profile set --name <NAME>`."),
    }
}

/// Show the calculated goal, optionally adopting it
pub async fn calculate(session: &mut NutritionSession, adopt: bool) -> AppResult<()> {
    let Some(profile) = session.profile() else {
        println!("No profile yet. Create one with `nutribuddy-cli profile set --name <NAME>`.");
        return Ok(());
    };
    let estimate = session.calculate_goal(profile);
    display_estimate(&estimate, profile.daily_calorie_goal);

    if adopt {
        if let Some(updated) = session.adopt_calculated_goal()? {
            println!("\nDaily calorie goal set to {} kcal", updated.daily_calorie_goal);
        }
        session.save().await?;
    }
    Ok(())
}
