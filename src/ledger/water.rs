// ABOUTME: Water counter state machine with day rollover, bounds, and goal
// ABOUTME: Reminder rule deciding when a hydration nudge is due
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use nutribuddy_core::constants::water::MAX_GLASSES_PER_DAY;
use nutribuddy_core::models::WaterIntake;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Reset `intake` when it belongs to an earlier (or later) day
///
/// Returns whether a rollover happened.
pub fn roll_over(intake: &mut WaterIntake, today: NaiveDate) -> bool {
    if intake.last_update == today {
        return false;
    }
    debug!(
        previous_day = %intake.last_update,
        previous_glasses = intake.glasses,
        %today,
        "Water counter rolled over"
    );
    intake.glasses = 0;
    intake.last_update = today;
    true
}

/// `100 * glasses / goal`, unbounded above 100
#[must_use]
pub fn progress_percent(intake: &WaterIntake) -> f64 {
    if intake.goal == 0 {
        return 0.0;
    }
    100.0 * f64::from(intake.glasses) / f64::from(intake.goal)
}

/// Progress clamped to 100 for display
#[must_use]
pub fn display_percent(intake: &WaterIntake) -> f64 {
    progress_percent(intake).min(100.0)
}

/// Whether the day's goal has been met
#[must_use]
pub const fn is_goal_reached(intake: &WaterIntake) -> bool {
    intake.glasses >= intake.goal
}

/// Access path to the water record
///
/// Opening the counter applies day rollover, so every read and write through
/// it sees today's state.
#[derive(Debug)]
pub struct WaterCounter<'a> {
    intake: &'a mut WaterIntake,
    max_glasses: u32,
}

impl<'a> WaterCounter<'a> {
    /// Open the counter for `today` with the standard 15-glass ceiling
    pub fn open(intake: &'a mut WaterIntake, today: NaiveDate) -> Self {
        Self::with_ceiling(intake, today, MAX_GLASSES_PER_DAY)
    }

    /// Open the counter for `today` with a custom ceiling
    pub fn with_ceiling(intake: &'a mut WaterIntake, today: NaiveDate, max_glasses: u32) -> Self {
        roll_over(intake, today);
        Self {
            intake,
            max_glasses,
        }
    }

    /// Today's record
    #[must_use]
    pub fn intake(&self) -> WaterIntake {
        *self.intake
    }

    /// Glasses drunk today
    #[must_use]
    pub fn glasses(&self) -> u32 {
        self.intake.glasses
    }

    /// Add a glass; a no-op at the ceiling
    pub fn increment(&mut self) -> u32 {
        if self.can_increment() {
            self.intake.glasses += 1;
        }
        debug!(glasses = self.intake.glasses, "Water increment");
        self.intake.glasses
    }

    /// Remove a glass; a no-op at zero
    pub fn decrement(&mut self) -> u32 {
        self.intake.glasses = self.intake.glasses.saturating_sub(1);
        debug!(glasses = self.intake.glasses, "Water decrement");
        self.intake.glasses
    }

    /// Replace the daily goal
    ///
    /// # Errors
    ///
    /// Returns a validation error if `goal` is zero
    pub fn set_goal(&mut self, goal: u32) -> AppResult<()> {
        if goal == 0 {
            warn!("Rejected zero water goal");
            return Err(
                AppError::invalid_input("Water goal must be a positive number of glasses")
                    .with_field("goal"),
            );
        }
        self.intake.goal = goal;
        debug!(goal, "Water goal set");
        Ok(())
    }

    /// Whether another glass can be added today
    #[must_use]
    pub fn can_increment(&self) -> bool {
        self.intake.glasses < self.max_glasses
    }

    /// Whether a glass can be removed
    #[must_use]
    pub fn can_decrement(&self) -> bool {
        self.intake.glasses > 0
    }

    /// Unbounded progress percentage
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        progress_percent(&*self.intake)
    }

    /// Progress clamped to 100
    #[must_use]
    pub fn display_percent(&self) -> f64 {
        display_percent(&*self.intake)
    }

    /// Whether today's goal has been met
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        is_goal_reached(&*self.intake)
    }
}

/// Decides whether a hydration reminder is due
///
/// The last reminder instant is transient and never persisted. The first
/// check after creation fires if the goal is not yet met.
#[derive(Debug, Clone)]
pub struct ReminderPolicy {
    interval: Duration,
    last_reminder: Option<Instant>,
}

impl ReminderPolicy {
    /// Policy spacing reminders at least `interval` apart
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_reminder: None,
        }
    }

    /// Minimum spacing between reminders
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// When the last reminder fired
    #[must_use]
    pub const fn last_reminder(&self) -> Option<Instant> {
        self.last_reminder
    }

    /// Evaluate the rule at `now`; stamps the reminder time when it fires
    pub fn evaluate(&mut self, intake: &WaterIntake, now: Instant) -> bool {
        let quiet_long_enough = self
            .last_reminder
            .map_or(true, |last| now.saturating_duration_since(last) > self.interval);

        if quiet_long_enough && intake.glasses < intake.goal {
            self.last_reminder = Some(now);
            return true;
        }
        false
    }
}
