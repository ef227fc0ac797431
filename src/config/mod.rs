// ABOUTME: Runtime configuration for the NutriBuddy ledger loaded from defaults and environment
// ABOUTME: Calorie default, water limits, reminder cadence, assistant pacing, and storage URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ledger Configuration Module
//!
//! Values start from the built-in defaults and can be overridden with
//! `NUTRIBUDDY_*` environment variables. An invalid override makes the
//! global instance fall back to defaults with a warning.

use crate::constants::{assistant, calories, profile, service_names, storage, water};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Global configuration singleton
static NUTRIBUDDY_CONFIG: OnceLock<NutriBuddyConfig> = OnceLock::new();

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value is outside its allowed range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
    /// Two related values are inconsistent
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),
    /// An environment override could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Top-level configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutriBuddyConfig {
    /// Calorie goal defaults
    pub calories: CalorieConfig,
    /// Water counter limits and reminder cadence
    pub water: WaterConfig,
    /// Scripted assistant pacing
    pub assistant: AssistantConfig,
    /// Record store location
    pub storage: StorageConfig,
}

impl NutriBuddyConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRIBUDDY_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load NutriBuddy config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let goal = self.calories.default_goal;
        if !(profile::CALORIE_GOAL_MIN..=profile::CALORIE_GOAL_MAX).contains(&goal) {
            return Err(ConfigError::ValueOutOfRange(
                "calories.default_goal must be between 1000 and 5000",
            ));
        }

        if !(1..=water::MAX_GLASSES_PER_DAY).contains(&self.water.max_glasses) {
            return Err(ConfigError::ValueOutOfRange(
                "water.max_glasses must be between 1 and 15",
            ));
        }
        if self.water.default_goal == 0 {
            return Err(ConfigError::ValueOutOfRange("water.default_goal must be > 0"));
        }
        if self.water.reminder_check_interval_secs == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "water.reminder_check_interval_secs must be > 0",
            ));
        }
        if self.water.reminder_check_interval_secs > self.water.reminder_interval_secs {
            return Err(ConfigError::InvalidRange(
                "water.reminder_check_interval_secs must not exceed reminder_interval_secs",
            ));
        }

        if self.storage.database_url.trim().is_empty() {
            return Err(ConfigError::ValueOutOfRange("storage.database_url must not be empty"));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "NUTRIBUDDY_DEFAULT_CALORIE_GOAL",
            &mut self.calories.default_goal,
        )?;

        Self::apply_env_var("NUTRIBUDDY_WATER_DEFAULT_GOAL", &mut self.water.default_goal)?;
        Self::apply_env_var("NUTRIBUDDY_WATER_MAX_GLASSES", &mut self.water.max_glasses)?;
        Self::apply_env_var(
            "NUTRIBUDDY_REMINDER_INTERVAL_SECS",
            &mut self.water.reminder_interval_secs,
        )?;
        Self::apply_env_var(
            "NUTRIBUDDY_REMINDER_CHECK_SECS",
            &mut self.water.reminder_check_interval_secs,
        )?;

        Self::apply_env_var(
            "NUTRIBUDDY_ASSISTANT_DELAY_MS",
            &mut self.assistant.response_delay_ms,
        )?;
        Self::apply_env_var(
            "NUTRIBUDDY_RECOGNITION_DELAY_MS",
            &mut self.assistant.recognition_delay_ms,
        )?;

        if let Ok(url) = env::var("NUTRIBUDDY_DATABASE_URL") {
            self.storage.database_url = url;
        }

        Ok(self)
    }
}

/// Calorie goal defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieConfig {
    /// Goal used for remaining-calorie reporting when no profile exists
    pub default_goal: u32,
}

impl Default for CalorieConfig {
    fn default() -> Self {
        Self {
            default_goal: calories::DEFAULT_DAILY_GOAL,
        }
    }
}

/// Water counter limits and reminder cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterConfig {
    /// Goal for a freshly created water record
    pub default_goal: u32,
    /// Per-day glass ceiling
    pub max_glasses: u32,
    /// Minimum spacing between two reminders
    pub reminder_interval_secs: u64,
    /// Polling period of the reminder task
    pub reminder_check_interval_secs: u64,
}

impl WaterConfig {
    /// Minimum spacing between two reminders
    #[must_use]
    pub const fn reminder_interval(&self) -> Duration {
        Duration::from_secs(self.reminder_interval_secs)
    }

    /// Polling period of the reminder task
    #[must_use]
    pub const fn reminder_check_interval(&self) -> Duration {
        Duration::from_secs(self.reminder_check_interval_secs)
    }
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            default_goal: water::DEFAULT_GOAL,
            max_glasses: water::MAX_GLASSES_PER_DAY,
            reminder_interval_secs: water::REMINDER_INTERVAL_SECS,
            reminder_check_interval_secs: water::REMINDER_CHECK_INTERVAL_SECS,
        }
    }
}

/// Pacing delays of the scripted assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Delay before a chat reply is revealed
    pub response_delay_ms: u64,
    /// Delay before a food recognition guess is revealed
    pub recognition_delay_ms: u64,
}

impl AssistantConfig {
    /// Chat reply delay
    #[must_use]
    pub const fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    /// Recognition delay
    #[must_use]
    pub const fn recognition_delay(&self) -> Duration {
        Duration::from_millis(self.recognition_delay_ms)
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            response_delay_ms: assistant::RESPONSE_DELAY_MS,
            recognition_delay_ms: assistant::RECOGNITION_DELAY_MS,
        }
    }
}

/// Record store location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// `memory` or a `sqlite:` URL
    pub database_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
        }
    }
}

/// `sqlite:` URL inside the platform data directory, or the working directory
/// when no data directory is known
#[must_use]
pub fn default_database_url() -> String {
    let path = dirs::data_dir().map_or_else(
        || PathBuf::from(storage::DATABASE_FILE_NAME),
        |dir| {
            dir.join(service_names::NUTRIBUDDY)
                .join(storage::DATABASE_FILE_NAME)
        },
    );
    format!("sqlite:{}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = NutriBuddyConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.calories.default_goal, 2000);
        assert_eq!(config.water.max_glasses, 15);
        assert_eq!(config.water.reminder_interval(), Duration::from_secs(7200));
        assert!(config.storage.database_url.starts_with("sqlite:"));
    }

    #[test]
    fn test_check_interval_longer_than_reminder_rejected() {
        let mut config = NutriBuddyConfig::default();
        config.water.reminder_check_interval_secs = config.water.reminder_interval_secs + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
