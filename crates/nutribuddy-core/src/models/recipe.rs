// ABOUTME: Read-only recipe reference record and the category filter
// ABOUTME: Recipes are catalog data, never user-owned or mutated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::food::MealType;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Static recipe suggestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Energy per serving in kcal
    pub calories: u32,
    /// Ordered ingredient lines
    pub ingredients: Vec<String>,
    /// Ordered preparation steps
    pub instructions: Vec<String>,
    /// Preparation time in minutes
    #[serde(rename = "prepTime")]
    pub prep_time_minutes: u32,
    /// Meal slot the recipe is suggested for
    pub category: MealType,
}

/// Category selection for catalog listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No category filter
    #[default]
    All,
    /// Exact category match
    Only(MealType),
}

impl CategoryFilter {
    /// Whether `category` passes the filter
    #[must_use]
    pub fn matches(&self, category: MealType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(meal) => write!(f, "{meal}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<MealType>()
            .map(Self::Only)
            .map_err(|_| {
                AppError::invalid_input(format!("Unknown category: {s}")).with_field("category")
            })
    }
}
