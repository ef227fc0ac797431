// ABOUTME: Declared ranges, limits, defaults, and storage keys for the nutrition ledger
// ABOUTME: Single source of truth for profile bounds, water limits, and persisted key names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Profile field ranges (inclusive)
pub mod profile {
    /// Minimum age in years
    pub const AGE_MIN: u32 = 13;
    /// Maximum age in years
    pub const AGE_MAX: u32 = 120;
    /// Minimum height in centimeters
    pub const HEIGHT_CM_MIN: f64 = 100.0;
    /// Maximum height in centimeters
    pub const HEIGHT_CM_MAX: f64 = 250.0;
    /// Minimum body weight (current and target) in kilograms
    pub const WEIGHT_KG_MIN: f64 = 30.0;
    /// Maximum body weight (current and target) in kilograms
    pub const WEIGHT_KG_MAX: f64 = 300.0;
    /// Minimum daily calorie goal
    pub const CALORIE_GOAL_MIN: u32 = 1000;
    /// Maximum daily calorie goal
    pub const CALORIE_GOAL_MAX: u32 = 5000;
}

/// Calorie bookkeeping defaults
pub mod calories {
    /// Goal used for reporting when no profile has been saved yet
    pub const DEFAULT_DAILY_GOAL: u32 = 2000;
    /// Meals-per-day target shown on the daily summary
    pub const MEALS_PER_DAY_TARGET: u32 = 4;
}

/// Water counter limits
pub mod water {
    /// Hard ceiling on glasses per day
    pub const MAX_GLASSES_PER_DAY: u32 = 15;
    /// Goal applied when no water record exists
    pub const DEFAULT_GOAL: u32 = 8;
    /// Preset goal menu
    pub const GOAL_PRESETS: [u32; 4] = [6, 8, 10, 12];
    /// Minimum time between two hydration reminders (2 hours)
    pub const REMINDER_INTERVAL_SECS: u64 = 2 * 60 * 60;
    /// Polling period of the reminder check
    pub const REMINDER_CHECK_INTERVAL_SECS: u64 = 60;
}

/// Scripted assistant pacing
pub mod assistant {
    /// Delay before a scripted chat reply is revealed
    pub const RESPONSE_DELAY_MS: u64 = 1500;
    /// Delay before a scripted food-recognition guess is revealed
    pub const RECOGNITION_DELAY_MS: u64 = 2000;
}

/// Key names in the external key-value store
pub mod storage_keys {
    /// Profile record (absent until first save)
    pub const USER_PROFILE: &str = "userProfile";
    /// Ordered sequence of food entries
    pub const FOOD_ENTRIES: &str = "foodEntries";
    /// Water intake singleton
    pub const WATER_INTAKE: &str = "waterIntake";
}
