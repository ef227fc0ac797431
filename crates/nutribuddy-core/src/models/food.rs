// ABOUTME: Food log entry record and meal type enum
// ABOUTME: Entries are immutable once created and grouped by calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    #[default]
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// All meal types in display order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|meal| meal.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!("Unknown meal type: {s}")).with_field("meal_type")
            })
    }
}

/// One logged food item
///
/// `date` is the calendar-day grouping key; `timestamp` is the precise
/// creation instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    /// Unique within the collection
    pub id: String,
    /// Food name
    pub food_name: String,
    /// Energy in kcal
    pub calories: f64,
    /// Meal slot
    pub meal_type: MealType,
    /// Calendar day the entry belongs to
    pub date: NaiveDate,
    /// Creation instant
    pub timestamp: DateTime<Utc>,
    /// Reference to the photo the entry was recognized from
    #[serde(
        rename = "imageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub image_reference: Option<String>,
}
