// ABOUTME: User profile record with biometric inputs and the declared calorie goal
// ABOUTME: Gender, DietType, and ActivityLevel enums plus range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::profile::{
    AGE_MAX, AGE_MIN, CALORIE_GOAL_MAX, CALORIE_GOAL_MIN, HEIGHT_CM_MAX, HEIGHT_CM_MIN,
    WEIGHT_KG_MAX, WEIGHT_KG_MIN,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender used to select BMR coefficients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male coefficients
    #[default]
    Male,
    /// Female coefficients
    Female,
    /// Uses the female coefficients
    Other,
}

impl Gender {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

/// Diet preference driving the recipe filter
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    /// No meat or fish
    #[default]
    Vegetarian,
    /// No restriction
    NonVegetarian,
}

impl DietType {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::NonVegetarian => "non-vegetarian",
        }
    }
}

/// Activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[default]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
}

impl ActivityLevel {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly-active",
            Self::ModeratelyActive => "moderately-active",
            Self::VeryActive => "very-active",
        }
    }
}

macro_rules! impl_wire_enum {
    ($ty:ty, $label:literal, [$($variant:expr),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase().replace('_', "-");
                [$($variant),+]
                    .into_iter()
                    .find(|candidate| candidate.as_str() == normalized)
                    .ok_or_else(|| {
                        AppError::invalid_input(format!("Unknown {}: {s}", $label))
                            .with_field($label)
                    })
            }
        }
    };
}

impl_wire_enum!(Gender, "gender", [Gender::Male, Gender::Female, Gender::Other]);
impl_wire_enum!(DietType, "diet_type", [DietType::Vegetarian, DietType::NonVegetarian]);
impl_wire_enum!(
    ActivityLevel,
    "activity_level",
    [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
    ]
);

/// The single profile of the active session
///
/// Fully overwritten on each save; no history is retained.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years (13-120)
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in centimeters (100-250)
    #[serde(rename = "height")]
    pub height_cm: f64,
    /// Current weight in kilograms (30-300)
    #[serde(rename = "weight")]
    pub weight_kg: f64,
    /// Target weight in kilograms (30-300)
    #[serde(rename = "targetWeight")]
    pub target_weight_kg: f64,
    /// Diet preference
    pub diet_type: DietType,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Declared daily calorie goal (1000-5000)
    pub daily_calorie_goal: u32,
}

impl Default for UserProfile {
    /// Form defaults; the empty name must be filled before the profile validates
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 25,
            gender: Gender::Male,
            height_cm: 170.0,
            weight_kg: 70.0,
            target_weight_kg: 65.0,
            diet_type: DietType::Vegetarian,
            activity_level: ActivityLevel::ModeratelyActive,
            daily_calorie_goal: 2000,
        }
    }
}

impl UserProfile {
    /// Check every field against its declared range
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        check_range("age", f64::from(self.age), f64::from(AGE_MIN), f64::from(AGE_MAX))?;
        check_range("height_cm", self.height_cm, HEIGHT_CM_MIN, HEIGHT_CM_MAX)?;
        check_range("weight_kg", self.weight_kg, WEIGHT_KG_MIN, WEIGHT_KG_MAX)?;
        check_range(
            "target_weight_kg",
            self.target_weight_kg,
            WEIGHT_KG_MIN,
            WEIGHT_KG_MAX,
        )?;
        check_range(
            "daily_calorie_goal",
            f64::from(self.daily_calorie_goal),
            f64::from(CALORIE_GOAL_MIN),
            f64::from(CALORIE_GOAL_MAX),
        )?;
        Ok(())
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> AppResult<()> {
    // NaN fails the contains check as well
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AppError::out_of_range(field, min, max, value))
    }
}
