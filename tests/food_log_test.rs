// ABOUTME: Tests for food log validation, day grouping, deletion, and calorie arithmetic
// ABOUTME: Uses a manual clock to place entries on specific calendar days
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

mod common;

use chrono::TimeDelta;
use common::{june, june_at};
use nutribuddy::clock::ManualClock;
use nutribuddy::errors::ErrorCode;
use nutribuddy::ledger::{remaining_calories, total_calories, CalorieBalance, FoodLog};
use nutribuddy_core::models::{FoodEntry, MealType};

#[test]
fn test_add_entry_stamps_day_and_trims_name() {
    let clock = ManualClock::at(june_at(10, 8, 15));
    let mut log = FoodLog::default();

    let entry = log
        .add_entry("  Oatmeal ", 320.0, MealType::Breakfast, None, &clock)
        .unwrap();

    assert_eq!(entry.food_name, "Oatmeal");
    assert_eq!(entry.date, june(10));
    assert_eq!(entry.timestamp.naive_utc(), june_at(10, 8, 15));
    assert!(entry.image_reference.is_none());
    assert_eq!(log.entries(), [entry]);
}

#[test]
fn test_ids_are_unique() {
    let clock = ManualClock::at(june_at(10, 8, 15));
    let mut log = FoodLog::default();
    let first = log.add_entry("Apple", 95.0, MealType::Snack, None, &clock).unwrap();
    let second = log.add_entry("Apple", 95.0, MealType::Snack, None, &clock).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn test_blank_name_rejected() {
    let clock = ManualClock::at(june_at(10, 8, 15));
    let mut log = FoodLog::default();

    let err = log
        .add_entry("   ", 200.0, MealType::Lunch, None, &clock)
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(err.context.field.as_deref(), Some("food_name"));
    assert!(log.is_empty());
}

#[test]
fn test_non_positive_calories_rejected() {
    let clock = ManualClock::at(june_at(10, 8, 15));
    let mut log = FoodLog::default();

    for calories in [0.0, -50.0, f64::NAN, f64::INFINITY] {
        let err = log
            .add_entry("Toast", calories, MealType::Breakfast, None, &clock)
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.context.field.as_deref(), Some("calories"));
    }
    assert!(log.is_empty());
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let clock = ManualClock::at(june_at(10, 8, 15));
    let mut log = FoodLog::default();
    let entry = log.add_entry("Soup", 180.0, MealType::Lunch, None, &clock).unwrap();

    assert!(!log.delete_entry("no-such-id"));
    assert_eq!(log.len(), 1);

    assert!(log.delete_entry(&entry.id));
    assert!(log.is_empty());
}

#[test]
fn test_todays_entries_filters_by_day() {
    let clock = ManualClock::at(june_at(9, 21, 0));
    let mut log = FoodLog::default();
    log.add_entry("Late pasta", 650.0, MealType::Dinner, None, &clock).unwrap();

    clock.advance(TimeDelta::hours(12));
    let breakfast = log.add_entry("Eggs", 210.0, MealType::Breakfast, None, &clock).unwrap();
    let snack = log.add_entry("Banana", 105.0, MealType::Snack, None, &clock).unwrap();

    let today = log.todays_entries(june(10));
    assert_eq!(today, [&breakfast, &snack]);
    assert!((total_calories(today) - 315.0).abs() < f64::EPSILON);
    assert_eq!(log.len(), 3);
}

#[test]
fn test_total_of_nothing_is_zero() {
    assert!(total_calories(Vec::<&FoodEntry>::new()).abs() < f64::EPSILON);
}

#[test]
fn test_total_ignores_entry_order() {
    let clock = ManualClock::at(june_at(10, 12, 0));
    let mut log = FoodLog::default();
    let meals = [
        ("Soup", 180.5),
        ("Bread", 95.25),
        ("Salad", 240.0),
        ("Apple", 52.0),
    ];
    for (name, calories) in meals {
        log.add_entry(name, calories, MealType::Lunch, None, &clock).unwrap();
    }

    let forward = total_calories(log.entries());
    let reversed = total_calories(log.entries().iter().rev());
    let entries = log.entries();
    let permuted = total_calories([&entries[2], &entries[0], &entries[3], &entries[1]]);

    assert!((forward - 567.75).abs() < f64::EPSILON);
    assert!((forward - reversed).abs() < f64::EPSILON);
    assert!((forward - permuted).abs() < f64::EPSILON);
}

#[test]
fn test_remaining_goes_negative_over_goal() {
    assert!((remaining_calories(2000.0, 2500.0) + 500.0).abs() < f64::EPSILON);

    let balance = CalorieBalance::new(2000.0, 2500.0);
    assert!(balance.is_over_goal());
    assert_eq!(balance, CalorieBalance::OverGoal(500.0));
    assert_eq!(balance.to_string(), "over goal by 500");

    let balance = CalorieBalance::new(2000.0, 1250.0);
    assert_eq!(balance.to_string(), "750 remaining");

    let balance = CalorieBalance::new(2000.0, 2000.0);
    assert_eq!(balance, CalorieBalance::Remaining(0.0));
}
