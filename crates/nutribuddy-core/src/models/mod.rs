// ABOUTME: Core data models for the nutrition ledger
// ABOUTME: Re-exports profile, food, water, recipe, and chat records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain serializable records. JSON field names follow the persisted layout
//! (camelCase keys, kebab-case enum values where the stored form uses them).

/// Chat transcript message
pub mod chat;
/// Food log entry and meal types
pub mod food;
/// User profile and biometric enums
pub mod profile;
/// Static recipe record and category filter
pub mod recipe;
/// Daily water intake record
pub mod water;

pub use chat::{ChatMessage, ChatRole};
pub use food::{FoodEntry, MealType};
pub use profile::{ActivityLevel, DietType, Gender, UserProfile};
pub use recipe::{CategoryFilter, Recipe};
pub use water::WaterIntake;
