// ABOUTME: Daily water intake singleton record
// ABOUTME: Glasses counter, goal, and the calendar day it was last touched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::water::DEFAULT_GOAL;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Water intake for a single calendar day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WaterIntake {
    /// Glasses drunk on `last_update`
    pub glasses: u32,
    /// Daily goal in glasses
    pub goal: u32,
    /// Calendar day the counter belongs to
    pub last_update: NaiveDate,
}

impl WaterIntake {
    /// Fresh record for `today` with the default goal
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self::with_goal(today, DEFAULT_GOAL)
    }

    /// Fresh record for `today` with the given goal
    #[must_use]
    pub const fn with_goal(today: NaiveDate, goal: u32) -> Self {
        Self {
            glasses: 0,
            goal,
            last_update: today,
        }
    }
}
