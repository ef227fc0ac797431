// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, pinned clocks, profiles, and in-memory sessions
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutribuddy`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use nutribuddy::assistant::ScriptedAssistant;
use nutribuddy::clock::ManualClock;
use nutribuddy::config::NutriBuddyConfig;
use nutribuddy::session::NutritionSession;
use nutribuddy::storage::{InMemoryStore, KeyValueStore};
use nutribuddy_core::models::{ActivityLevel, DietType, Gender, UserProfile};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar day in June 2025
pub fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

/// Local reading on a June 2025 day
pub fn june_at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    june(day).and_hms_opt(hour, minute, 0).unwrap()
}

/// Clock pinned to 09:30 on 2025-06-10
pub fn morning_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::at(june_at(10, 9, 30)))
}

/// Valid profile: male, 30 years, 170 cm, 70 kg, moderately active
pub fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Alex".to_owned(),
        age: 30,
        gender: Gender::Male,
        height_cm: 170.0,
        weight_kg: 70.0,
        target_weight_kg: 65.0,
        diet_type: DietType::Vegetarian,
        activity_level: ActivityLevel::ModeratelyActive,
        daily_calorie_goal: 2000,
    }
}

/// Session over an empty in-memory store with an immediate assistant
pub async fn create_test_session(clock: Arc<ManualClock>) -> Result<NutritionSession> {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    create_test_session_with_store(store, clock).await
}

/// Session over `store` with an immediate assistant
pub async fn create_test_session_with_store(
    store: Arc<dyn KeyValueStore>,
    clock: Arc<ManualClock>,
) -> Result<NutritionSession> {
    init_test_logging();
    let assistant = Arc::new(ScriptedAssistant::immediate());
    let session = NutritionSession::open(store, clock, NutriBuddyConfig::default())
        .await?
        .with_assistant(assistant.clone())
        .with_recognizer(assistant);
    Ok(session)
}
