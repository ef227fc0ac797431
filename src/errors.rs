// ABOUTME: Application error surface re-exported from the core crate
// ABOUTME: Adds conversions for root-crate error sources such as configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Unified Error Handling
//!
//! Every fallible ledger, storage, and service operation returns [`AppResult`].
//! Validation failures (`AppError::is_validation`) block the write they guard.

pub use nutribuddy_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};

use crate::config::ConfigError;

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string())
    }
}
