// ABOUTME: Tests for profile validation ranges and the save-profile rule
// ABOUTME: Rejected profiles leave the previously saved profile untouched
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

mod common;

use common::sample_profile;
use nutribuddy::errors::ErrorCode;
use nutribuddy::ledger::profile::{calorie_goal, diet_type, save_profile};
use nutribuddy_core::models::{ActivityLevel, DietType, Gender, UserProfile};

#[test]
fn test_range_edges_are_inclusive() {
    let edges = [
        UserProfile { age: 13, ..sample_profile() },
        UserProfile { age: 120, ..sample_profile() },
        UserProfile { height_cm: 100.0, ..sample_profile() },
        UserProfile { height_cm: 250.0, ..sample_profile() },
        UserProfile { weight_kg: 30.0, target_weight_kg: 300.0, ..sample_profile() },
        UserProfile { daily_calorie_goal: 1000, ..sample_profile() },
        UserProfile { daily_calorie_goal: 5000, ..sample_profile() },
    ];
    for profile in edges {
        assert!(profile.validate().is_ok(), "{profile:?} should validate");
    }
}

#[test]
fn test_out_of_range_fields_named() {
    let cases = [
        (UserProfile { age: 12, ..sample_profile() }, "age"),
        (UserProfile { height_cm: 99.5, ..sample_profile() }, "height_cm"),
        (UserProfile { weight_kg: 301.0, ..sample_profile() }, "weight_kg"),
        (UserProfile { target_weight_kg: 29.0, ..sample_profile() }, "target_weight_kg"),
        (UserProfile { daily_calorie_goal: 999, ..sample_profile() }, "daily_calorie_goal"),
    ];
    for (profile, field) in cases {
        let err = profile.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(err.context.field.as_deref(), Some(field));
    }
}

#[test]
fn test_blank_name_rejected() {
    let err = UserProfile { name: "  ".to_owned(), ..sample_profile() }
        .validate()
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert_eq!(err.context.field.as_deref(), Some("name"));
}

#[test]
fn test_failed_save_keeps_previous_profile() {
    let mut slot = None;
    save_profile(&mut slot, sample_profile()).unwrap();

    let bad = UserProfile { age: 200, ..sample_profile() };
    assert!(save_profile(&mut slot, bad).is_err());
    assert_eq!(slot, Some(sample_profile()));

    let updated = UserProfile {
        name: "Sam".to_owned(),
        gender: Gender::Other,
        activity_level: ActivityLevel::VeryActive,
        diet_type: DietType::NonVegetarian,
        ..sample_profile()
    };
    let saved = save_profile(&mut slot, updated.clone()).unwrap();
    assert_eq!(saved, &updated);
}

#[test]
fn test_goal_and_diet_fallbacks() {
    assert_eq!(calorie_goal(None, 2000), 2000);
    assert_eq!(diet_type(None), None);

    let profile = UserProfile { daily_calorie_goal: 1800, ..sample_profile() };
    assert_eq!(calorie_goal(Some(&profile), 2000), 1800);
    assert_eq!(diet_type(Some(&profile)), Some(DietType::Vegetarian));
}

#[test]
fn test_enum_parsing_accepts_wire_forms() {
    assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
    assert_eq!("non_vegetarian".parse::<DietType>().unwrap(), DietType::NonVegetarian);
    assert_eq!(
        "lightly-active".parse::<ActivityLevel>().unwrap(),
        ActivityLevel::LightlyActive
    );

    let err = "athletic".parse::<ActivityLevel>().unwrap_err();
    assert_eq!(err.context.field.as_deref(), Some("activity_level"));
}
