// ABOUTME: Main library entry point for the NutriBuddy nutrition and hydration ledger
// ABOUTME: Ledger operations, persistence, reminder task, assistant seam, and session facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriBuddy`
//!
//! A personal nutrition ledger: a profile with a calculated calorie goal, a
//! dated food log, a daily water counter with reminders, a static recipe
//! catalog, and a scripted nutrition assistant.
//!
//! ## Architecture
//!
//! - **Ledger**: pure operations over a plain [`ledger::RecordSet`]
//! - **Storage**: key-value backends with explicit `load`/`save`
//! - **Reminder**: cancellable tokio task polling the water counter
//! - **Assistant**: async service traits with a scripted local stand-in
//! - **Session**: facade wiring records, store, clock, and services
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutribuddy::clock::SystemClock;
//! use nutribuddy::config::NutriBuddyConfig;
//! use nutribuddy::errors::AppResult;
//! use nutribuddy::session::NutritionSession;
//! use nutribuddy::storage::Store;
//! use nutribuddy_core::models::MealType;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = NutriBuddyConfig::global().clone();
//!     let store = Arc::new(Store::from_config(&config).await?);
//!     let mut session = NutritionSession::open(store, Arc::new(SystemClock), config).await?;
//!
//!     session.add_entry("Oatmeal", 320.0, MealType::Breakfast, None)?;
//!     println!("{}", session.calorie_balance());
//!     session.save().await
//! }
//! ```

/// Assistant and food recognition service seam
pub mod assistant;

/// Wall-clock abstraction
pub mod clock;

/// Runtime configuration
pub mod config;

/// Application constants
pub mod constants;

/// Daily dashboard summary
pub mod dashboard;

/// Unified error handling
pub mod errors;

/// Food log, water counter, and profile rules
pub mod ledger;

/// Structured logging setup
pub mod logging;

/// Hydration reminder task
pub mod reminder;

/// Session facade
pub mod session;

/// Key-value persistence
pub mod storage;
