// ABOUTME: Tests for the keyword rule table behind the scripted assistant
// ABOUTME: Covers rule priority, case folding, fall-through, and diet interpolation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use nutribuddy_core::models::DietType;
use nutribuddy_intelligence::responder::{
    classify, respond, ResponseTopic, ScriptedResponder, EXERCISE_TEMPLATE, GENERAL_TEMPLATE,
    HYDRATION_TEMPLATE, WEIGHT_LOSS_TEMPLATE,
};

#[test]
fn test_weight_loss_reply_is_verbatim() {
    assert_eq!(respond("How can I LOSE some Weight?"), WEIGHT_LOSS_TEMPLATE);
}

#[test]
fn test_weight_alone_is_not_weight_loss() {
    assert_eq!(classify("What is a healthy weight?"), ResponseTopic::General);
}

#[test]
fn test_rule_priority() {
    // weight loss outranks meal
    assert_eq!(classify("What should I eat to lose weight?"), ResponseTopic::WeightLoss);
    // meal outranks exercise
    assert_eq!(classify("food before a workout"), ResponseTopic::Meal);
    // exercise outranks hydration
    assert_eq!(classify("water during exercise"), ResponseTopic::Exercise);
    assert_eq!(classify("Water intake tips"), ResponseTopic::Hydration);
}

#[test]
fn test_substring_matching_without_semantics() {
    // "dinner" is not a keyword
    assert_eq!(classify("What's for dinner?"), ResponseTopic::General);
    assert_eq!(respond("What's for dinner?"), GENERAL_TEMPLATE);
    // "eat" inside "great" still matches
    assert_eq!(classify("great"), ResponseTopic::Meal);
    // and inside "create", so this quick question gets the meal reply
    assert_eq!(classify("Create a workout plan"), ResponseTopic::Meal);
}

#[test]
fn test_templates_for_other_topics() {
    assert_eq!(respond("Any exercise tips?"), EXERCISE_TEMPLATE);
    assert_eq!(respond("hydration?"), HYDRATION_TEMPLATE);
    assert_eq!(respond(""), GENERAL_TEMPLATE);
}

#[test]
fn test_meal_template_interpolates_diet() {
    let vegetarian = ScriptedResponder::new(DietType::Vegetarian).respond("Suggest healthy meals");
    assert!(vegetarian.contains("Based on your vegetarian diet preference"));

    let omnivore = ScriptedResponder::new(DietType::NonVegetarian).respond("Suggest healthy meals");
    assert!(omnivore.contains("Based on your non-vegetarian diet preference"));
    assert!(!omnivore.contains("{diet}"));

    let default = ScriptedResponder::for_diet(None).respond("meal ideas");
    assert_eq!(default, vegetarian);
}
