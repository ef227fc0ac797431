// ABOUTME: Food log operations and daily calorie arithmetic
// ABOUTME: Entries are appended with a fresh id and day key, and only ever removed by id
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::clock::Clock;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use nutribuddy_core::models::{FoodEntry, MealType};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use uuid::Uuid;

/// Insertion-ordered collection of food entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodLog {
    entries: Vec<FoodEntry>,
}

impl FoodLog {
    /// Log over previously persisted entries
    #[must_use]
    pub const fn from_entries(entries: Vec<FoodEntry>) -> Self {
        Self { entries }
    }

    /// All entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[FoodEntry] {
        &self.entries
    }

    /// Number of entries across all days
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a new entry stamped with the clock's day and instant
    ///
    /// # Errors
    ///
    /// Returns a validation error if `food_name` is blank or `calories` is not
    /// a positive finite number; the log is left unchanged
    pub fn add_entry(
        &mut self,
        food_name: &str,
        calories: f64,
        meal_type: MealType,
        image_reference: Option<String>,
        clock: &dyn Clock,
    ) -> AppResult<FoodEntry> {
        let food_name = food_name.trim();
        if food_name.is_empty() {
            warn!("Rejected food entry with empty name");
            return Err(AppError::missing_field("food_name"));
        }
        if !calories.is_finite() || calories <= 0.0 {
            warn!(calories, "Rejected food entry with non-positive calories");
            return Err(
                AppError::invalid_input("Calories must be a positive number").with_field("calories")
            );
        }

        let entry = FoodEntry {
            id: Uuid::new_v4().to_string(),
            food_name: food_name.to_owned(),
            calories,
            meal_type,
            date: clock.today(),
            timestamp: clock.now(),
            image_reference,
        };
        debug!(id = %entry.id, meal = %meal_type, calories, "Logged food entry");

        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Remove the entry with `id`; returns whether anything was removed
    ///
    /// An unknown id is not an error.
    pub fn delete_entry(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        debug!(id, removed, "Delete food entry");
        removed
    }

    /// Entries whose day key is `today`, in insertion order
    #[must_use]
    pub fn todays_entries(&self, today: NaiveDate) -> Vec<&FoodEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.date == today)
            .collect()
    }
}

/// Sum of calories over `entries`
#[must_use]
pub fn total_calories<'a>(entries: impl IntoIterator<Item = &'a FoodEntry>) -> f64 {
    entries.into_iter().map(|entry| entry.calories).sum()
}

/// `goal - consumed`; negative when the goal was exceeded
#[must_use]
pub fn remaining_calories(goal: f64, consumed: f64) -> f64 {
    goal - consumed
}

/// Remaining calories as reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "calories", rename_all = "snake_case")]
pub enum CalorieBalance {
    /// Calories still available today
    Remaining(f64),
    /// Calories consumed beyond the goal
    OverGoal(f64),
}

impl CalorieBalance {
    /// Balance for a goal and consumption
    #[must_use]
    pub fn new(goal: f64, consumed: f64) -> Self {
        Self::from_remaining(remaining_calories(goal, consumed))
    }

    /// Classify a signed remaining value
    #[must_use]
    pub fn from_remaining(remaining: f64) -> Self {
        if remaining < 0.0 {
            Self::OverGoal(-remaining)
        } else {
            Self::Remaining(remaining)
        }
    }

    /// Whether the goal was exceeded
    #[must_use]
    pub const fn is_over_goal(&self) -> bool {
        matches!(self, Self::OverGoal(_))
    }
}

impl fmt::Display for CalorieBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remaining(calories) => write!(f, "{calories} remaining"),
            Self::OverGoal(calories) => write!(f, "over goal by {calories}"),
        }
    }
}
