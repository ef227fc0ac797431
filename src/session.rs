// ABOUTME: Session facade owning the record set, store, clock, and assistant services
// ABOUTME: Exposes every ledger operation and persists only on explicit save
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Nutrition Session
//!
//! One session per active user. Mutations change the in-memory records only;
//! call [`NutritionSession::save`] to write them through to the store.

use crate::assistant::{AssistantService, ChatTranscript, FoodRecognitionService, ScriptedAssistant};
use crate::clock::Clock;
use crate::config::NutriBuddyConfig;
use crate::dashboard::DailySummary;
use crate::errors::AppResult;
use crate::ledger::water::ReminderPolicy;
use crate::ledger::{profile, total_calories, CalorieBalance, FoodLog, RecordSet, WaterCounter};
use crate::reminder::{HydrationReminder, ReminderSignal, SharedWater};
use crate::storage::KeyValueStore;
use nutribuddy_core::models::{
    CategoryFilter, ChatMessage, DietType, FoodEntry, MealType, Recipe, UserProfile, WaterIntake,
};
use nutribuddy_intelligence::calculator::{adopt_calculated_goal, estimate_daily_energy};
use nutribuddy_intelligence::recipes::RecipeCatalog;
use nutribuddy_intelligence::recognition::image_fingerprint;
use nutribuddy_intelligence::{DailyEnergyEstimate, NutritionConfig};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::info;

/// Active user session
pub struct NutritionSession {
    user_profile: Option<UserProfile>,
    food_log: FoodLog,
    water: SharedWater,
    transcript: ChatTranscript,
    catalog: RecipeCatalog,
    nutrition: NutritionConfig,
    config: NutriBuddyConfig,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    assistant: Arc<dyn AssistantService>,
    recognizer: Arc<dyn FoodRecognitionService>,
}

impl NutritionSession {
    /// Load the record set from `store` and start a session
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error if the stored records cannot be read
    pub async fn open(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        config: NutriBuddyConfig,
    ) -> AppResult<Self> {
        let records =
            RecordSet::load_with_water_goal(store.as_ref(), clock.today(), config.water.default_goal)
                .await?;
        info!(backend = store.backend_name(), "Opened nutrition session");

        let scripted = Arc::new(ScriptedAssistant::from_config(&config.assistant));
        Ok(Self {
            user_profile: records.user_profile,
            food_log: records.food_entries,
            water: Arc::new(Mutex::new(records.water_intake)),
            transcript: ChatTranscript::new(clock.as_ref()),
            catalog: RecipeCatalog::builtin(),
            nutrition: NutritionConfig::default(),
            config,
            store,
            clock,
            assistant: scripted.clone(),
            recognizer: scripted,
        })
    }

    /// Replace the chat assistant
    #[must_use]
    pub fn with_assistant(mut self, assistant: Arc<dyn AssistantService>) -> Self {
        self.assistant = assistant;
        self
    }

    /// Replace the food recognizer
    #[must_use]
    pub fn with_recognizer(mut self, recognizer: Arc<dyn FoodRecognitionService>) -> Self {
        self.recognizer = recognizer;
        self
    }

    /// Current records as one serializable set
    pub async fn snapshot(&self) -> RecordSet {
        RecordSet {
            user_profile: self.user_profile.clone(),
            food_entries: self.food_log.clone(),
            water_intake: *self.water.lock().await,
        }
    }

    /// Write every record to the store
    ///
    /// # Errors
    ///
    /// Returns a serialization or storage error
    pub async fn save(&self) -> AppResult<()> {
        self.snapshot().await.save(self.store.as_ref()).await
    }

    // ---------------------------------------------------------------- profile

    /// Saved profile, if any
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.user_profile.as_ref()
    }

    /// Validate and replace the profile
    ///
    /// # Errors
    ///
    /// Returns a validation error; the previous profile is kept
    pub fn save_profile(&mut self, updated: UserProfile) -> AppResult<&UserProfile> {
        profile::save_profile(&mut self.user_profile, updated)
    }

    /// BMR, TDEE, and goal for `profile` without changing anything
    #[must_use]
    pub fn calculate_goal(&self, profile: &UserProfile) -> DailyEnergyEstimate {
        estimate_daily_energy(profile, &self.nutrition)
    }

    /// Replace the saved profile's goal with the calculated one
    ///
    /// Returns `None` when no profile exists.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the updated profile does not validate
    pub fn adopt_calculated_goal(&mut self) -> AppResult<Option<&UserProfile>> {
        let Some(current) = self.user_profile.as_ref() else {
            return Ok(None);
        };
        let updated = adopt_calculated_goal(current, &self.nutrition);
        profile::save_profile(&mut self.user_profile, updated).map(Some)
    }

    /// Goal used for calorie reporting
    #[must_use]
    pub fn calorie_goal(&self) -> u32 {
        profile::calorie_goal(self.profile(), self.config.calories.default_goal)
    }

    // --------------------------------------------------------------- food log

    /// Log a food entry for today
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank name or non-positive calories
    pub fn add_entry(
        &mut self,
        food_name: &str,
        calories: f64,
        meal_type: MealType,
        image_reference: Option<String>,
    ) -> AppResult<FoodEntry> {
        self.food_log.add_entry(
            food_name,
            calories,
            meal_type,
            image_reference,
            self.clock.as_ref(),
        )
    }

    /// Recognize a food photo and log the guess with an image reference
    ///
    /// # Errors
    ///
    /// Returns the recognizer's error (empty images are a validation error)
    pub async fn add_entry_from_image(
        &mut self,
        image: &[u8],
        meal_type: MealType,
    ) -> AppResult<FoodEntry> {
        let guess = self.recognizer.classify_food_image(image).await?;
        let reference = format!("sha256:{}", image_fingerprint(image));
        self.add_entry(&guess.name, guess.calories, meal_type, Some(reference))
    }

    /// Delete an entry; returns whether one was removed
    pub fn delete_entry(&mut self, id: &str) -> bool {
        self.food_log.delete_entry(id)
    }

    /// All logged entries
    #[must_use]
    pub const fn food_log(&self) -> &FoodLog {
        &self.food_log
    }

    /// Today's entries in insertion order
    #[must_use]
    pub fn todays_entries(&self) -> Vec<&FoodEntry> {
        self.food_log.todays_entries(self.clock.today())
    }

    /// Calories eaten today
    #[must_use]
    pub fn todays_calories(&self) -> f64 {
        total_calories(self.todays_entries())
    }

    /// Remaining calories or excess for today
    #[must_use]
    pub fn calorie_balance(&self) -> CalorieBalance {
        CalorieBalance::new(f64::from(self.calorie_goal()), self.todays_calories())
    }

    // ------------------------------------------------------------------ water

    /// Add a glass
    pub async fn add_water(&self) -> WaterIntake {
        let mut intake = self.water.lock().await;
        let mut counter = self.water_counter(&mut intake);
        counter.increment();
        counter.intake()
    }

    /// Remove a glass
    pub async fn remove_water(&self) -> WaterIntake {
        let mut intake = self.water.lock().await;
        let mut counter = self.water_counter(&mut intake);
        counter.decrement();
        counter.intake()
    }

    /// Replace the water goal
    ///
    /// # Errors
    ///
    /// Returns a validation error if `goal` is zero
    pub async fn set_water_goal(&self, goal: u32) -> AppResult<WaterIntake> {
        let mut intake = self.water.lock().await;
        let mut counter = self.water_counter(&mut intake);
        counter.set_goal(goal)?;
        Ok(counter.intake())
    }

    /// Today's water record
    pub async fn water_status(&self) -> WaterIntake {
        let mut intake = self.water.lock().await;
        self.water_counter(&mut intake).intake()
    }

    fn water_counter<'a>(&self, intake: &'a mut WaterIntake) -> WaterCounter<'a> {
        WaterCounter::with_ceiling(intake, self.clock.today(), self.config.water.max_glasses)
    }

    /// Start the hydration reminder for this session's water record
    #[must_use]
    pub fn start_reminder(&self) -> (HydrationReminder, mpsc::Receiver<ReminderSignal>) {
        HydrationReminder::spawn(
            Arc::clone(&self.water),
            Arc::clone(&self.clock),
            ReminderPolicy::new(self.config.water.reminder_interval()),
            self.config.water.reminder_check_interval(),
        )
    }

    // ------------------------------------------------------ recipes and chat

    /// Recipes for the profile's diet in `category`
    ///
    /// Without a profile nothing is excluded.
    #[must_use]
    pub fn recipes(&self, category: CategoryFilter) -> Vec<&Recipe> {
        let diet = profile::diet_type(self.profile()).unwrap_or(DietType::NonVegetarian);
        self.catalog.list(diet, category)
    }

    /// Ask the assistant; appends the question and the reply to the transcript
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank text or the assistant's error
    pub async fn send_message(&mut self, text: &str) -> AppResult<&ChatMessage> {
        let diet = profile::diet_type(self.user_profile.as_ref());
        self.transcript
            .send(text, diet, self.assistant.as_ref(), self.clock.as_ref())
            .await
    }

    /// Chat transcript
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        self.transcript.messages()
    }

    // -------------------------------------------------------------- dashboard

    /// Dashboard summary for now
    pub async fn summary(&self) -> DailySummary {
        let records = self.snapshot().await;
        DailySummary::build(&records, self.clock.as_ref(), self.config.calories.default_goal)
    }
}
