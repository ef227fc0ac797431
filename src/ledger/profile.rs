// ABOUTME: Profile save rule and goal lookup used by the food log and dashboard
// ABOUTME: A profile is validated as a whole and overwrites the previous one only on success
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::errors::AppResult;
use nutribuddy_core::models::{DietType, UserProfile};
use tracing::{debug, warn};

/// Validate and store `profile`, replacing any previous one
///
/// # Errors
///
/// Returns the validation error of the first out-of-range field; `slot` is
/// left untouched
pub fn save_profile(slot: &mut Option<UserProfile>, profile: UserProfile) -> AppResult<&UserProfile> {
    if let Err(error) = profile.validate() {
        warn!(field = ?error.context.field, "Rejected profile: {error}");
        return Err(error);
    }
    debug!(
        age = profile.age,
        diet = %profile.diet_type,
        activity = %profile.activity_level,
        goal = profile.daily_calorie_goal,
        "Saved profile"
    );
    Ok(slot.insert(profile))
}

/// The profile's declared goal, or `default_goal` when no profile exists
#[must_use]
pub fn calorie_goal(profile: Option<&UserProfile>, default_goal: u32) -> u32 {
    profile.map_or(default_goal, |profile| profile.daily_calorie_goal)
}

/// The profile's diet preference, if any
#[must_use]
pub fn diet_type(profile: Option<&UserProfile>) -> Option<DietType> {
    profile.map(|profile| profile.diet_type)
}
