// ABOUTME: Daily calorie goal calculation from profile biometrics
// ABOUTME: Harris-Benedict BMR scaled by an activity factor, rounded to whole kcal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Calculator Module
//!
//! Inputs are pre-validated by the profile's range constraints, so every
//! function here is total. Nothing mutates the profile; the caller decides
//! whether to adopt the computed goal.

use crate::config::{ActivityFactorsConfig, BmrConfig, NutritionConfig};
use nutribuddy_core::constants::profile::{CALORIE_GOAL_MAX, CALORIE_GOAL_MIN};
use nutribuddy_core::models::{ActivityLevel, Gender, UserProfile};
use serde::{Deserialize, Serialize};

/// Intermediate and final values of a goal calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyEnergyEstimate {
    /// Basal Metabolic Rate in kcal/day
    pub bmr: f64,
    /// Total Daily Energy Expenditure in kcal/day
    pub tdee: f64,
    /// TDEE rounded to the nearest whole kcal
    pub daily_calorie_goal: u32,
}

/// Calculate Basal Metabolic Rate using the revised Harris-Benedict equation
///
/// - Male: `88.362 + 13.397 x weight + 4.799 x height - 5.677 x age`
/// - Female/other: `447.593 + 9.247 x weight + 3.098 x height - 4.330 x age`
#[must_use]
pub fn calculate_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let age = f64::from(age);
    match gender {
        Gender::Male => config.male_age_coef.mul_add(
            -age,
            config.male_height_coef.mul_add(
                height_cm,
                config
                    .male_weight_coef
                    .mul_add(weight_kg, config.male_constant),
            ),
        ),
        Gender::Female | Gender::Other => config.female_age_coef.mul_add(
            -age,
            config.female_height_coef.mul_add(
                height_cm,
                config
                    .female_weight_coef
                    .mul_add(weight_kg, config.female_constant),
            ),
        ),
    }
}

/// Calculate Total Daily Energy Expenditure: `BMR x activity factor`
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * config.factor_for(activity_level)
}

/// Full estimate for a profile under the given coefficients
#[must_use]
pub fn estimate_daily_energy(profile: &UserProfile, config: &NutritionConfig) -> DailyEnergyEstimate {
    let bmr = calculate_harris_benedict(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);

    DailyEnergyEstimate {
        bmr,
        tdee,
        daily_calorie_goal: round_kcal(tdee),
    }
}

/// Daily calorie goal for a profile with the standard coefficients
#[must_use]
pub fn compute_daily_calorie_goal(profile: &UserProfile) -> u32 {
    estimate_daily_energy(profile, &NutritionConfig::default()).daily_calorie_goal
}

/// Copy of `profile` carrying the computed goal
///
/// The goal is clamped into the declared 1000-5000 range so the copy still
/// validates for extreme biometrics.
#[must_use]
pub fn adopt_calculated_goal(profile: &UserProfile, config: &NutritionConfig) -> UserProfile {
    let estimate = estimate_daily_energy(profile, config);
    UserProfile {
        daily_calorie_goal: estimate
            .daily_calorie_goal
            .clamp(CALORIE_GOAL_MIN, CALORIE_GOAL_MAX),
        ..profile.clone()
    }
}

fn round_kcal(value: f64) -> u32 {
    // Range-validated inputs keep TDEE well inside u32
    value.round().max(0.0) as u32
}
