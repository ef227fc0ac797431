// ABOUTME: Explicit load/save of the ledger record set to a key-value store
// ABOUTME: userProfile, foodEntries, and waterIntake keys with camelCase JSON values
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{read_json, write_json, KeyValueStore};
use crate::constants::storage_keys::{FOOD_ENTRIES, USER_PROFILE, WATER_INTAKE};
use crate::constants::water::{DEFAULT_GOAL, MAX_GLASSES_PER_DAY};
use crate::errors::AppResult;
use crate::ledger::{water, FoodLog, RecordSet};
use chrono::NaiveDate;
use nutribuddy_core::models::{UserProfile, WaterIntake};

impl RecordSet {
    /// Load the record set, defaulting absent records
    ///
    /// A missing water record becomes `{glasses: 0, goal: 8, lastUpdate: today}`.
    ///
    /// # Errors
    ///
    /// Returns a storage error or a serialization error for malformed records
    pub async fn load(store: &dyn KeyValueStore, today: NaiveDate) -> AppResult<Self> {
        Self::load_with_water_goal(store, today, DEFAULT_GOAL).await
    }

    /// Load the record set, using `water_goal` for a missing water record
    ///
    /// A stored water record is clamped to at most 15 glasses, and a zero goal
    /// is replaced by `water_goal`.
    ///
    /// # Errors
    ///
    /// Returns a storage error or a serialization error for malformed records
    pub async fn load_with_water_goal(
        store: &dyn KeyValueStore,
        today: NaiveDate,
        water_goal: u32,
    ) -> AppResult<Self> {
        let user_profile = read_json::<UserProfile>(store, USER_PROFILE).await?;
        let food_entries = read_json::<FoodLog>(store, FOOD_ENTRIES)
            .await?
            .unwrap_or_default();
        let mut water_intake = read_json::<WaterIntake>(store, WATER_INTAKE)
            .await?
            .unwrap_or_else(|| WaterIntake::with_goal(today, water_goal));
        water::roll_over(&mut water_intake, today);
        if water_intake.glasses > MAX_GLASSES_PER_DAY {
            tracing::warn!(glasses = water_intake.glasses, "Clamped stored water count");
            water_intake.glasses = MAX_GLASSES_PER_DAY;
        }
        if water_intake.goal == 0 {
            tracing::warn!("Replaced zero stored water goal");
            water_intake.goal = water_goal;
        }

        tracing::debug!(
            backend = store.backend_name(),
            has_profile = user_profile.is_some(),
            entries = food_entries.len(),
            glasses = water_intake.glasses,
            "Loaded record set"
        );

        Ok(Self {
            user_profile,
            food_entries,
            water_intake,
        })
    }

    /// Persist every record; the profile key is written only when a profile exists
    ///
    /// # Errors
    ///
    /// Returns a serialization error or a storage error from the backend
    pub async fn save(&self, store: &dyn KeyValueStore) -> AppResult<()> {
        if let Some(profile) = &self.user_profile {
            write_json(store, USER_PROFILE, profile).await?;
        }
        write_json(store, FOOD_ENTRIES, &self.food_entries).await?;
        write_json(store, WATER_INTAKE, &self.water_intake).await?;
        Ok(())
    }
}
