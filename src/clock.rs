// ABOUTME: Wall-clock abstraction supplying the current instant and local calendar day
// ABOUTME: SystemClock for real sessions, ManualClock for deterministic tests and replays
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, Utc,
};
use std::sync::{Mutex, PoisonError};

/// Source of "now" for every ledger operation
///
/// The calendar day is the grouping key for food entries and the rollover key
/// for the water counter, so it is always taken in the user's local time.
pub trait Clock: Send + Sync {
    /// Precise current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current local calendar day
    fn today(&self) -> NaiveDate;

    /// Current local time of day
    fn time_of_day(&self) -> NaiveTime;
}

/// Clock backed by the operating system and local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn time_of_day(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Settable clock pinned to a fixed UTC offset
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<FixedOffset>>,
}

impl ManualClock {
    /// Clock reading `local` at UTC+0
    #[must_use]
    pub fn at(local: NaiveDateTime) -> Self {
        Self::with_offset(local, Utc.fix())
    }

    /// Clock reading `local` in the given offset
    #[must_use]
    pub fn with_offset(local: NaiveDateTime, offset: FixedOffset) -> Self {
        let current = DateTime::<FixedOffset>::from_naive_utc_and_offset(local - offset, offset);
        Self {
            current: Mutex::new(current),
        }
    }

    /// Move the clock forward (or backward for a negative delta)
    pub fn advance(&self, delta: TimeDelta) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        *current += delta;
    }

    /// Jump to a new local reading, keeping the offset
    pub fn set(&self, local: NaiveDateTime) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        let offset = *current.offset();
        *current = DateTime::<FixedOffset>::from_naive_utc_and_offset(local - offset, offset);
    }

    fn read(&self) -> DateTime<FixedOffset> {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.read().with_timezone(&Utc)
    }

    fn today(&self) -> NaiveDate {
        self.read().date_naive()
    }

    fn time_of_day(&self) -> NaiveTime {
        self.read().time()
    }
}
