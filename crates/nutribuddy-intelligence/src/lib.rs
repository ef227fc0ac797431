// ABOUTME: Nutrition domain rules for the NutriBuddy ledger
// ABOUTME: Pure functions over core records with no storage or clock access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriBuddy` Intelligence
//!
//! The small rule engine behind the ledger:
//!
//! - **calculator**: Harris-Benedict BMR and activity-scaled TDEE
//! - **recipes**: static catalog filtered by diet preference and category
//! - **responder**: ordered keyword rule table producing canned advice
//! - **recognition**: deterministic food-image recognition stand-in

/// BMR/TDEE calculator and daily calorie goal
pub mod calculator;

/// Calculator coefficients and activity factors
pub mod config;

/// Deterministic food recognition stand-in
pub mod recognition;

/// Static recipe catalog and diet filtering
pub mod recipes;

/// Scripted keyword responder
pub mod responder;

pub use calculator::{compute_daily_calorie_goal, DailyEnergyEstimate};
pub use config::NutritionConfig;
