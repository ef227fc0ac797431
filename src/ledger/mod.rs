// ABOUTME: Nutrition and hydration ledger over a plain serializable record set
// ABOUTME: Food log, water counter, and profile rules; no storage or global state access
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Ledger
//!
//! The record set is passed in and out explicitly. Persisting it is the
//! caller's job (see [`crate::storage`]).

/// Append/delete-only food log and calorie balance
pub mod food_log;
/// Profile save and goal lookup
pub mod profile;
/// Daily water counter and reminder rule
pub mod water;

pub use food_log::{remaining_calories, total_calories, CalorieBalance, FoodLog};
pub use water::{ReminderPolicy, WaterCounter};

use chrono::NaiveDate;
use nutribuddy_core::models::{UserProfile, WaterIntake};
use serde::{Deserialize, Serialize};

/// Everything the ledger persists for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    /// Profile, absent until the first save
    pub user_profile: Option<UserProfile>,
    /// Insertion-ordered food entries
    pub food_entries: FoodLog,
    /// Today's water counter
    pub water_intake: WaterIntake,
}

impl RecordSet {
    /// Empty record set for a new user
    #[must_use]
    pub fn new(today: NaiveDate, water_goal: u32) -> Self {
        Self {
            user_profile: None,
            food_entries: FoodLog::default(),
            water_intake: WaterIntake::with_goal(today, water_goal),
        }
    }
}
