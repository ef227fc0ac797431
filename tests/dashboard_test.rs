// ABOUTME: Tests for the daily dashboard summary
// ABOUTME: Covers greetings, progress bands, meal count, and the calorie warning
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

mod common;

use anyhow::Result;
use common::{create_test_session, june, june_at, sample_profile};
use nutribuddy::clock::ManualClock;
use nutribuddy::dashboard::{DailySummary, ProgressStatus, TimeOfDay};
use nutribuddy::ledger::{CalorieBalance, RecordSet};
use nutribuddy_core::models::{MealType, UserProfile, WaterIntake};
use std::sync::Arc;

#[test]
fn test_summary_without_profile_prompts_setup() {
    let clock = ManualClock::at(june_at(10, 9, 0));
    let records = RecordSet::new(june(10), 8);

    let summary = DailySummary::build(&records, &clock, 2000);

    assert!(summary.needs_profile);
    assert_eq!(
        summary.greeting,
        "Welcome to NutriBuddy! Please complete your profile to get started."
    );
    assert!((summary.calories.goal - 2000.0).abs() < f64::EPSILON);
    assert_eq!(summary.calories.status, ProgressStatus::OnTrack);
    assert!(summary.calorie_warning().is_none());
}

#[test]
fn test_greeting_follows_time_of_day() {
    let mut records = RecordSet::new(june(10), 8);
    records.user_profile = Some(sample_profile());

    for (hour, expected) in [
        (7, "Good Morning, Alex!"),
        (13, "Good Afternoon, Alex!"),
        (21, "Good Evening, Alex!"),
    ] {
        let clock = ManualClock::at(june_at(10, hour, 0));
        let summary = DailySummary::build(&records, &clock, 2000);
        assert_eq!(summary.greeting, expected);
        assert!(!summary.needs_profile);
    }
    assert_eq!(TimeOfDay::Afternoon.to_string(), "Afternoon");
}

#[test]
fn test_summary_reads_stale_water_as_zero() {
    let clock = ManualClock::at(june_at(10, 9, 0));
    let mut records = RecordSet::new(june(9), 8);
    records.water_intake = WaterIntake {
        glasses: 6,
        goal: 8,
        last_update: june(9),
    };

    let summary = DailySummary::build(&records, &clock, 2000);
    assert!(summary.water.value.abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_over_goal_summary() -> Result<()> {
    let clock = Arc::new(ManualClock::at(june_at(10, 19, 45)));
    let mut session = create_test_session(clock).await?;
    session.save_profile(UserProfile {
        daily_calorie_goal: 1500,
        ..sample_profile()
    })?;
    session.add_entry("Pancakes", 600.0, MealType::Breakfast, None)?;
    session.add_entry("Pasta", 800.0, MealType::Lunch, None)?;
    session.add_entry("Cake", 350.0, MealType::Snack, None)?;
    for _ in 0..7 {
        session.add_water().await;
    }

    let summary = session.summary().await;

    assert_eq!(summary.time_of_day, TimeOfDay::Evening);
    assert_eq!(summary.entries.len(), 3);
    assert_eq!(summary.calories.status, ProgressStatus::Exceeded);
    assert_eq!(summary.balance, CalorieBalance::OverGoal(250.0));
    assert_eq!(
        summary.calorie_warning().as_deref(),
        Some("Warning: You've exceeded your daily calorie goal by 250 calories!")
    );
    assert!((summary.calories.display_percent() - 100.0).abs() < f64::EPSILON);

    // 7 of 8 glasses is 87.5%
    assert_eq!(summary.water.status, ProgressStatus::Approaching);
    // 3 of 4 meals is 75%
    assert_eq!(summary.meals.status, ProgressStatus::OnTrack);
    assert!((summary.meals.percent - 75.0).abs() < f64::EPSILON);
    Ok(())
}
