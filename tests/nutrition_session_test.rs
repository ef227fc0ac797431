// ABOUTME: Integration tests for the nutrition session facade
// ABOUTME: Exercises profile, food, water, recipes, chat, and persistence through one session
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

mod common;

use anyhow::Result;
use chrono::TimeDelta;
use common::{create_test_session, create_test_session_with_store, june, morning_clock, sample_profile};
use nutribuddy::errors::ErrorCode;
use nutribuddy::ledger::CalorieBalance;
use nutribuddy::storage::{InMemoryStore, KeyValueStore};
use nutribuddy_core::models::{CategoryFilter, ChatRole, DietType, MealType, UserProfile};
use nutribuddy_intelligence::recognition::{image_fingerprint, REFERENCE_FOODS};
use nutribuddy_intelligence::responder::{GREETING, WEIGHT_LOSS_TEMPLATE};
use std::sync::Arc;

#[tokio::test]
async fn test_new_session_has_defaults() -> Result<()> {
    let session = create_test_session(morning_clock()).await?;

    assert!(session.profile().is_none());
    assert_eq!(session.calorie_goal(), 2000);
    assert!(session.food_log().is_empty());
    assert_eq!(session.water_status().await.goal, 8);
    assert_eq!(session.calorie_balance(), CalorieBalance::Remaining(2000.0));
    Ok(())
}

#[tokio::test]
async fn test_profile_goal_drives_balance() -> Result<()> {
    let mut session = create_test_session(morning_clock()).await?;
    session.save_profile(UserProfile {
        daily_calorie_goal: 1800,
        ..sample_profile()
    })?;

    session.add_entry("Granola", 450.0, MealType::Breakfast, None)?;
    session.add_entry("Burrito", 900.0, MealType::Lunch, None)?;
    session.add_entry("Pizza", 700.0, MealType::Dinner, None)?;

    assert!((session.todays_calories() - 2050.0).abs() < f64::EPSILON);
    assert_eq!(session.calorie_balance(), CalorieBalance::OverGoal(250.0));
    Ok(())
}

#[tokio::test]
async fn test_invalid_profile_keeps_previous() -> Result<()> {
    let mut session = create_test_session(morning_clock()).await?;
    session.save_profile(sample_profile())?;

    let err = session
        .save_profile(UserProfile {
            height_cm: 300.0,
            ..sample_profile()
        })
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(session.profile(), Some(&sample_profile()));
    Ok(())
}

#[tokio::test]
async fn test_calculate_and_adopt_goal() -> Result<()> {
    let mut session = create_test_session(morning_clock()).await?;
    assert!(session.adopt_calculated_goal()?.is_none());

    session.save_profile(sample_profile())?;
    let estimate = session.calculate_goal(&sample_profile());
    assert_eq!(estimate.daily_calorie_goal, 2591);
    assert_eq!(session.calorie_goal(), 2000);

    let adopted = session.adopt_calculated_goal()?.map(|p| p.daily_calorie_goal);
    assert_eq!(adopted, Some(2591));
    assert_eq!(session.calorie_goal(), 2591);
    Ok(())
}

#[tokio::test]
async fn test_entry_from_image_uses_recognizer() -> Result<()> {
    let mut session = create_test_session(morning_clock()).await?;
    let image = b"fake jpeg bytes".as_slice();

    let entry = session.add_entry_from_image(image, MealType::Lunch).await?;

    assert!(REFERENCE_FOODS
        .iter()
        .any(|(name, calories)| *name == entry.food_name
            && (*calories - entry.calories).abs() < f64::EPSILON));
    assert_eq!(
        entry.image_reference,
        Some(format!("sha256:{}", image_fingerprint(image)))
    );
    assert_eq!(entry.meal_type, MealType::Lunch);

    // Same photo, same guess
    let again = session.add_entry_from_image(image, MealType::Dinner).await?;
    assert_eq!(again.food_name, entry.food_name);
    assert_eq!(session.todays_entries().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_empty_image_rejected() -> Result<()> {
    let mut session = create_test_session(morning_clock()).await?;
    let err = session
        .add_entry_from_image(&[], MealType::Snack)
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(session.food_log().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_water_through_session() -> Result<()> {
    let session = create_test_session(morning_clock()).await?;

    session.add_water().await;
    session.add_water().await;
    assert_eq!(session.remove_water().await.glasses, 1);

    let err = session.set_water_goal(0).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(session.set_water_goal(10).await?.goal, 10);
    assert_eq!(session.water_status().await.glasses, 1);
    Ok(())
}

#[tokio::test]
async fn test_recipes_follow_profile_diet() -> Result<()> {
    let mut session = create_test_session(morning_clock()).await?;
    assert_eq!(session.recipes(CategoryFilter::All).len(), 4);

    session.save_profile(sample_profile())?;
    assert_eq!(session.recipes(CategoryFilter::All).len(), 3);
    assert!(session
        .recipes(CategoryFilter::Only(MealType::Dinner))
        .is_empty());
    Ok(())
}

#[tokio::test]
async fn test_chat_transcript() -> Result<()> {
    let mut session = create_test_session(morning_clock()).await?;
    assert_eq!(session.transcript().len(), 1);
    assert_eq!(session.transcript()[0].content, GREETING);
    assert_eq!(session.transcript()[0].role, ChatRole::Assistant);

    let err = session.send_message("   ").await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(session.transcript().len(), 1);

    let reply = session.send_message("I want to lose weight").await?;
    assert_eq!(reply.content, WEIGHT_LOSS_TEMPLATE);

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[1].role, ChatRole::User);
    assert_eq!(transcript[1].content, "I want to lose weight");
    assert_eq!(transcript[2].role, ChatRole::Assistant);
    Ok(())
}

#[tokio::test]
async fn test_chat_meal_reply_uses_profile_diet() -> Result<()> {
    let mut session = create_test_session(morning_clock()).await?;
    session.save_profile(UserProfile {
        diet_type: DietType::NonVegetarian,
        ..sample_profile()
    })?;

    let reply = session.send_message("Suggest healthy meals").await?;
    assert!(reply.content.contains("non-vegetarian diet preference"));
    Ok(())
}

#[tokio::test]
async fn test_nothing_persists_until_save() -> Result<()> {
    let store = Arc::new(InMemoryStore::new());
    let mut session = create_test_session_with_store(store.clone(), morning_clock()).await?;

    session.save_profile(sample_profile())?;
    session.add_entry("Apple", 95.0, MealType::Snack, None)?;
    session.add_water().await;
    assert!(store.is_empty().await);

    session.save().await?;
    assert!(store.get_raw("userProfile").await?.is_some());
    assert_eq!(store.len().await, 3);
    Ok(())
}

#[tokio::test]
async fn test_reopen_next_day_rolls_over() -> Result<()> {
    let store = Arc::new(InMemoryStore::new());
    let clock = morning_clock();

    let mut session = create_test_session_with_store(store.clone(), clock.clone()).await?;
    session.save_profile(sample_profile())?;
    session.add_entry("Apple", 95.0, MealType::Snack, None)?;
    session.add_water().await;
    session.set_water_goal(10).await?;
    session.save().await?;
    drop(session);

    clock.advance(TimeDelta::days(1));
    let session = create_test_session_with_store(store, clock).await?;

    assert_eq!(session.profile(), Some(&sample_profile()));
    assert_eq!(session.food_log().len(), 1);
    assert!(session.todays_entries().is_empty());
    let water = session.water_status().await;
    assert_eq!(water.glasses, 0);
    assert_eq!(water.goal, 10);
    assert_eq!(water.last_update, june(11));
    Ok(())
}
