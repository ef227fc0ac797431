// ABOUTME: Tests for the assistant and food recognition service seam
// ABOUTME: Covers scripted pacing, deterministic recognition, and failing service backends
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

mod common;

use anyhow::Result;
use async_trait::async_trait;
use common::{create_test_session, june_at, morning_clock};
use nutribuddy::assistant::{
    AssistantRequest, AssistantService, ChatTranscript, FoodRecognitionService, ScriptedAssistant,
};
use nutribuddy::clock::ManualClock;
use nutribuddy::errors::{AppError, AppResult, ErrorCode};
use nutribuddy_core::models::{ChatRole, DietType, MealType};
use nutribuddy_intelligence::recognition::FoodGuess;
use nutribuddy_intelligence::responder::HYDRATION_TEMPLATE;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

struct OfflineService;

#[async_trait]
impl AssistantService for OfflineService {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn answer_question(&self, _request: &AssistantRequest) -> AppResult<String> {
        Err(AppError::external_service("offline", "no connection"))
    }
}

#[async_trait]
impl FoodRecognitionService for OfflineService {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn classify_food_image(&self, _image: &[u8]) -> AppResult<FoodGuess> {
        Err(AppError::external_service("offline", "no connection"))
    }
}

#[tokio::test(start_paused = true)]
async fn test_scripted_reply_is_paced() -> Result<()> {
    let assistant = ScriptedAssistant::new(Duration::from_millis(1500), Duration::from_millis(2000));
    let start = Instant::now();

    let reply = assistant
        .answer_question(&AssistantRequest::new("hydration tips"))
        .await?;
    assert_eq!(reply, HYDRATION_TEMPLATE);
    assert_eq!(start.elapsed(), Duration::from_millis(1500));

    assistant.classify_food_image(b"photo").await?;
    assert_eq!(start.elapsed(), Duration::from_millis(3500));
    Ok(())
}

#[tokio::test]
async fn test_request_carries_diet() -> Result<()> {
    let assistant = ScriptedAssistant::immediate();
    let request = AssistantRequest::new("meal ideas").with_diet(Some(DietType::NonVegetarian));

    let reply = assistant.answer_question(&request).await?;
    assert!(reply.contains("non-vegetarian"));
    Ok(())
}

#[tokio::test]
async fn test_recognition_is_deterministic() -> Result<()> {
    let assistant = ScriptedAssistant::immediate();
    let first = assistant.classify_food_image(b"breakfast.jpg").await?;
    let second = assistant.classify_food_image(b"breakfast.jpg").await?;
    assert_eq!(first, second);

    let err = assistant.classify_food_image(&[]).await.unwrap_err();
    assert_eq!(err.context.field.as_deref(), Some("image"));
    Ok(())
}

#[tokio::test]
async fn test_failed_reply_keeps_question() {
    let clock = ManualClock::at(june_at(10, 9, 0));
    let mut transcript = ChatTranscript::new(&clock);

    let err = transcript
        .send("Any water tips?", None, &OfflineService, &clock)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    let messages = transcript.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].role, ChatRole::User);
    assert_eq!(messages[1].content, "Any water tips?");
}

#[tokio::test]
async fn test_failed_recognition_logs_nothing() -> Result<()> {
    let mut session = create_test_session(morning_clock())
        .await?
        .with_recognizer(Arc::new(OfflineService));

    let err = session
        .add_entry_from_image(b"photo", MealType::Lunch)
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(session.food_log().is_empty());
    Ok(())
}
