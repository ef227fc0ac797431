// ABOUTME: Assistant and food recognition service seam with the scripted local stand-in
// ABOUTME: Chat transcript that opens with a greeting and appends question/answer pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Assistant Services
//!
//! Both services are async traits so a real model or vision backend can be
//! plugged in later. [`ScriptedAssistant`] answers from the keyword rule table
//! and the deterministic recognition table after a pacing delay.

use crate::clock::Clock;
use crate::config::AssistantConfig;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use nutribuddy_core::models::{ChatMessage, DietType};
use nutribuddy_intelligence::recognition::{self, FoodGuess};
use nutribuddy_intelligence::responder::{ScriptedResponder, GREETING};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// A question for the assistant with the user's context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantRequest {
    /// Question text as typed
    pub question: String,
    /// Diet preference from the profile, if one exists
    pub diet_type: Option<DietType>,
}

impl AssistantRequest {
    /// Request without profile context
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            diet_type: None,
        }
    }

    /// Attach a diet preference
    #[must_use]
    pub const fn with_diet(mut self, diet_type: Option<DietType>) -> Self {
        self.diet_type = diet_type;
        self
    }
}

/// Answers nutrition and fitness questions
#[async_trait]
pub trait AssistantService: Send + Sync {
    /// Unique service identifier
    fn name(&self) -> &'static str;

    /// Answer a question
    async fn answer_question(&self, request: &AssistantRequest) -> AppResult<String>;
}

/// Recognizes a food and its calories from a photo
#[async_trait]
pub trait FoodRecognitionService: Send + Sync {
    /// Unique service identifier
    fn name(&self) -> &'static str;

    /// Classify the image bytes
    async fn classify_food_image(&self, image: &[u8]) -> AppResult<FoodGuess>;
}

/// Local stand-in for both services
#[derive(Debug, Clone, Copy)]
pub struct ScriptedAssistant {
    response_delay: Duration,
    recognition_delay: Duration,
}

impl Default for ScriptedAssistant {
    fn default() -> Self {
        Self::from_config(&AssistantConfig::default())
    }
}

impl ScriptedAssistant {
    /// Stand-in with explicit pacing delays
    #[must_use]
    pub const fn new(response_delay: Duration, recognition_delay: Duration) -> Self {
        Self {
            response_delay,
            recognition_delay,
        }
    }

    /// Stand-in paced by configuration
    #[must_use]
    pub const fn from_config(config: &AssistantConfig) -> Self {
        Self::new(config.response_delay(), config.recognition_delay())
    }

    /// Stand-in that answers without delay
    #[must_use]
    pub const fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

async fn pace(delay: Duration) {
    if !delay.is_zero() {
        sleep(delay).await;
    }
}

#[async_trait]
impl AssistantService for ScriptedAssistant {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn answer_question(&self, request: &AssistantRequest) -> AppResult<String> {
        pace(self.response_delay).await;
        Ok(ScriptedResponder::for_diet(request.diet_type).respond(&request.question))
    }
}

#[async_trait]
impl FoodRecognitionService for ScriptedAssistant {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn classify_food_image(&self, image: &[u8]) -> AppResult<FoodGuess> {
        pace(self.recognition_delay).await;
        let guess = recognition::guess_food(image)?;
        debug!(food = %guess.name, calories = guess.calories, "Recognized food image");
        Ok(guess)
    }
}

/// Append-only conversation with the assistant
#[derive(Debug, Clone)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    /// Transcript opening with the assistant greeting
    #[must_use]
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING, clock.now())],
        }
    }

    /// Messages in order
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send `text`, appending the user message and then the reply
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank text (nothing is appended), or the
    /// assistant's error after the user message was appended
    pub async fn send(
        &mut self,
        text: &str,
        diet_type: Option<DietType>,
        assistant: &dyn AssistantService,
        clock: &dyn Clock,
    ) -> AppResult<&ChatMessage> {
        let question = text.trim();
        if question.is_empty() {
            warn!("Rejected blank chat message");
            return Err(AppError::invalid_input("Message must not be blank").with_field("content"));
        }

        self.messages.push(ChatMessage::user(question, clock.now()));

        let request = AssistantRequest::new(question).with_diet(diet_type);
        let reply = assistant.answer_question(&request).await?;
        debug!(service = assistant.name(), "Assistant replied");

        self.messages.push(ChatMessage::assistant(reply, clock.now()));
        self.messages
            .last()
            .ok_or_else(|| AppError::internal("Transcript empty after append"))
    }
}
