// ABOUTME: Calculator configuration for BMR coefficients and TDEE activity factors
// ABOUTME: Defaults reproduce the Harris-Benedict equation with standard activity multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Configuration
//!
//! # Scientific References
//!
//! - BMR: Harris, J.A., & Benedict, F.G. (1918), revised by Roza & Shizgal (1984).
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//! - Activity factors: `McArdle` et al. (2010) - Exercise Physiology

use nutribuddy_core::models::ActivityLevel;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Activity factors must increase with activity
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),
}

/// Calculator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
}

impl NutritionConfig {
    /// Validate coefficients and factors
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a factor is not positive or factors are not increasing
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()
    }
}

/// Harris-Benedict (revised) coefficients, one set per gender branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male constant term (88.362)
    pub male_constant: f64,
    /// Male weight coefficient (13.397)
    pub male_weight_coef: f64,
    /// Male height coefficient (4.799)
    pub male_height_coef: f64,
    /// Male age coefficient (5.677, subtracted)
    pub male_age_coef: f64,
    /// Female/other constant term (447.593)
    pub female_constant: f64,
    /// Female/other weight coefficient (9.247)
    pub female_weight_coef: f64,
    /// Female/other height coefficient (3.098)
    pub female_height_coef: f64,
    /// Female/other age coefficient (4.330, subtracted)
    pub female_age_coef: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male_constant: 88.362,
            male_weight_coef: 13.397,
            male_height_coef: 4.799,
            male_age_coef: 5.677,
            female_constant: 447.593,
            female_weight_coef: 9.247,
            female_height_coef: 3.098,
            female_age_coef: 4.330,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for the given activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }

    /// Validate that every factor is positive and factors increase with activity
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on a non-positive or non-increasing factor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sedentary <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be positive",
            ));
        }
        let ordered = [
            self.sedentary,
            self.lightly_active,
            self.moderately_active,
            self.very_active,
        ];
        if ordered.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "activity factors must increase from sedentary to very active",
            ));
        }
        Ok(())
    }
}
