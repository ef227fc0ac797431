// ABOUTME: Tests for NutriBuddy configuration defaults, validation, and environment overrides
// ABOUTME: Environment tests run serially since they mutate process-wide variables
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use nutribuddy::config::{ConfigError, NutriBuddyConfig};
use nutribuddy::errors::{AppError, ErrorCode};
use serial_test::serial;
use std::time::Duration;

const OVERRIDE_VARS: [&str; 8] = [
    "NUTRIBUDDY_DEFAULT_CALORIE_GOAL",
    "NUTRIBUDDY_WATER_DEFAULT_GOAL",
    "NUTRIBUDDY_WATER_MAX_GLASSES",
    "NUTRIBUDDY_REMINDER_INTERVAL_SECS",
    "NUTRIBUDDY_REMINDER_CHECK_SECS",
    "NUTRIBUDDY_ASSISTANT_DELAY_MS",
    "NUTRIBUDDY_RECOGNITION_DELAY_MS",
    "NUTRIBUDDY_DATABASE_URL",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_overrides();
    let config = NutriBuddyConfig::load().unwrap();

    assert_eq!(config.calories.default_goal, 2000);
    assert_eq!(config.water.default_goal, 8);
    assert_eq!(config.water.max_glasses, 15);
    assert_eq!(config.water.reminder_interval(), Duration::from_secs(7200));
    assert_eq!(config.water.reminder_check_interval(), Duration::from_secs(60));
    assert_eq!(config.assistant.response_delay(), Duration::from_millis(1500));
    assert_eq!(config.assistant.recognition_delay(), Duration::from_millis(2000));
    assert!(config.storage.database_url.starts_with("sqlite:"));
    assert!(config.storage.database_url.ends_with("nutribuddy.db"));
}

#[test]
#[serial]
fn test_environment_variable_override() {
    clear_overrides();
    std::env::set_var("NUTRIBUDDY_DEFAULT_CALORIE_GOAL", "2200");
    std::env::set_var("NUTRIBUDDY_WATER_DEFAULT_GOAL", " 10 ");
    std::env::set_var("NUTRIBUDDY_REMINDER_CHECK_SECS", "30");
    std::env::set_var("NUTRIBUDDY_ASSISTANT_DELAY_MS", "0");
    std::env::set_var("NUTRIBUDDY_DATABASE_URL", "memory");

    let config = NutriBuddyConfig::load().unwrap();

    assert_eq!(config.calories.default_goal, 2200);
    assert_eq!(config.water.default_goal, 10);
    assert_eq!(config.water.reminder_check_interval_secs, 30);
    assert_eq!(config.assistant.response_delay(), Duration::ZERO);
    assert_eq!(config.storage.database_url, "memory");

    clear_overrides();
}

#[test]
#[serial]
fn test_unparsable_override_rejected() {
    clear_overrides();
    std::env::set_var("NUTRIBUDDY_WATER_MAX_GLASSES", "lots");

    let err = NutriBuddyConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(ref msg) if msg.contains("NUTRIBUDDY_WATER_MAX_GLASSES")));

    clear_overrides();
}

#[test]
#[serial]
fn test_out_of_range_override_rejected() {
    clear_overrides();
    std::env::set_var("NUTRIBUDDY_DEFAULT_CALORIE_GOAL", "800");

    let err = NutriBuddyConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));

    clear_overrides();
    std::env::set_var("NUTRIBUDDY_WATER_MAX_GLASSES", "40");

    let err = NutriBuddyConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::ValueOutOfRange(_)));

    clear_overrides();
}

#[test]
fn test_check_interval_must_not_exceed_reminder_interval() {
    let mut config = NutriBuddyConfig::default();
    config.water.reminder_check_interval_secs = config.water.reminder_interval_secs + 1;

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRange(_)));

    let app_error = AppError::from(err);
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
}

#[test]
fn test_zero_water_limits_rejected() {
    let mut config = NutriBuddyConfig::default();
    config.water.max_glasses = 0;
    assert!(config.validate().is_err());

    let mut config = NutriBuddyConfig::default();
    config.water.max_glasses = 16;
    assert!(config.validate().is_err());

    let mut config = NutriBuddyConfig::default();
    config.water.max_glasses = 15;
    assert!(config.validate().is_ok());

    let mut config = NutriBuddyConfig::default();
    config.water.default_goal = 0;
    assert!(config.validate().is_err());

    let mut config = NutriBuddyConfig::default();
    config.storage.database_url = "  ".to_owned();
    assert!(config.validate().is_err());
}
