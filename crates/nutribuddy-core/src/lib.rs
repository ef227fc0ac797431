// ABOUTME: Core types and constants for the NutriBuddy nutrition ledger
// ABOUTME: Foundation crate with error handling, domain records, and range constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `NutriBuddy` Core
//!
//! Foundation crate providing the shared records and error types for the
//! `NutriBuddy` ledger. Nothing here touches storage or the clock; records are
//! passed in and out of the higher layers by value.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Declared ranges, limits, and storage keys
//! - **models**: Profile, food entry, water intake, recipe, and chat records

/// Unified error handling system with standard error codes
pub mod errors;

/// Declared ranges, limits, defaults, and storage keys
pub mod constants;

/// Core data models (profile, food log, water intake, recipes, chat)
pub mod models;
