// ABOUTME: Daily dashboard summary derived from the record set
// ABOUTME: Calorie, water, and meal progress with status bands and a time-of-day greeting
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::clock::Clock;
use crate::constants::calories::MEALS_PER_DAY_TARGET;
use crate::ledger::{profile, total_calories, water, CalorieBalance, RecordSet};
use chrono::{NaiveDate, NaiveTime, Timelike};
use nutribuddy_core::models::FoodEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status band of a progress percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    /// At most 80%
    OnTrack,
    /// Above 80%, at most 100%
    Approaching,
    /// Above 100%
    Exceeded,
}

impl ProgressStatus {
    /// Band for `percent`
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent > 100.0 {
            Self::Exceeded
        } else if percent > 80.0 {
            Self::Approaching
        } else {
            Self::OnTrack
        }
    }
}

/// Part of the day used in the greeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// Before 12:00
    Morning,
    /// 12:00 to 16:59
    Afternoon,
    /// 17:00 onward
    Evening,
}

impl TimeOfDay {
    /// Part of the day for a local time
    #[must_use]
    pub fn from_time(time: NaiveTime) -> Self {
        match time.hour() {
            0..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            _ => Self::Evening,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        })
    }
}

/// Progress of one tracked quantity toward its goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressMetric {
    /// Amount reached today
    pub value: f64,
    /// Daily goal
    pub goal: f64,
    /// `100 * value / goal`, unbounded
    pub percent: f64,
    /// Status band of `percent`
    pub status: ProgressStatus,
}

impl ProgressMetric {
    /// Metric for `value` against `goal`
    #[must_use]
    pub fn new(value: f64, goal: f64) -> Self {
        let percent = if goal > 0.0 { 100.0 * value / goal } else { 0.0 };
        Self {
            value,
            goal,
            percent,
            status: ProgressStatus::from_percent(percent),
        }
    }

    /// Percentage clamped to 100 for progress bars
    #[must_use]
    pub fn display_percent(&self) -> f64 {
        self.percent.min(100.0)
    }
}

/// Everything the dashboard shows for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    /// Day summarized
    pub date: NaiveDate,
    /// Part of the day at build time
    pub time_of_day: TimeOfDay,
    /// Greeting line, or the setup prompt when no profile exists
    pub greeting: String,
    /// Whether the profile still has to be created
    pub needs_profile: bool,
    /// Calories eaten against the goal
    pub calories: ProgressMetric,
    /// Glasses drunk against the water goal
    pub water: ProgressMetric,
    /// Entries logged against the meals target
    pub meals: ProgressMetric,
    /// Remaining calories or the excess over the goal
    pub balance: CalorieBalance,
    /// Today's entries in insertion order
    pub entries: Vec<FoodEntry>,
}

impl DailySummary {
    /// Summarize `records` at the clock's current time
    ///
    /// `default_goal` is used when no profile exists.
    #[must_use]
    pub fn build(records: &RecordSet, clock: &dyn Clock, default_goal: u32) -> Self {
        let today = clock.today();
        let time_of_day = TimeOfDay::from_time(clock.time_of_day());
        let profile = records.user_profile.as_ref();

        let entries: Vec<FoodEntry> = records
            .food_entries
            .todays_entries(today)
            .into_iter()
            .cloned()
            .collect();
        let consumed = total_calories(&entries);
        let goal = f64::from(profile::calorie_goal(profile, default_goal));

        let mut intake = records.water_intake;
        water::roll_over(&mut intake, today);

        let greeting = profile.map_or_else(
            || "Welcome to NutriBuddy! Please complete your profile to get started.".to_owned(),
            |profile| format!("Good {time_of_day}, {}!", profile.name),
        );

        Self {
            date: today,
            time_of_day,
            greeting,
            needs_profile: profile.is_none(),
            calories: ProgressMetric::new(consumed, goal),
            water: ProgressMetric::new(f64::from(intake.glasses), f64::from(intake.goal)),
            meals: ProgressMetric::new(entries.len() as f64, f64::from(MEALS_PER_DAY_TARGET)),
            balance: CalorieBalance::new(goal, consumed),
            entries,
        }
    }

    /// Warning line when the calorie goal was exceeded
    #[must_use]
    pub fn calorie_warning(&self) -> Option<String> {
        match self.balance {
            CalorieBalance::OverGoal(excess) => Some(format!(
                "Warning: You've exceeded your daily calorie goal by {excess} calories!"
            )),
            CalorieBalance::Remaining(_) => None,
        }
    }
}
