// ABOUTME: Cancellable background task polling the water counter for due reminders
// ABOUTME: Delivers reminder signals over a channel; stopped explicitly or aborted on drop
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::clock::Clock;
use crate::ledger::water::{self, ReminderPolicy};
use chrono::{DateTime, Utc};
use nutribuddy_core::models::WaterIntake;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Water record shared between the session and the reminder task
pub type SharedWater = Arc<Mutex<WaterIntake>>;

/// Headline of every reminder
pub const REMINDER_TITLE: &str = "Time to Hydrate!";

/// Channel capacity for undelivered reminders
const SIGNAL_BUFFER: usize = 8;

/// A due hydration reminder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderSignal {
    /// When the reminder fired
    pub fired_at: DateTime<Utc>,
    /// Glasses drunk so far today
    pub glasses: u32,
    /// Today's goal
    pub goal: u32,
}

impl ReminderSignal {
    /// Text shown to the user
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "{REMINDER_TITLE} {} of {} glasses so far today.",
            self.glasses, self.goal
        )
    }
}

/// Handle to the running reminder task
///
/// Dropping the handle aborts the task.
#[derive(Debug)]
pub struct HydrationReminder {
    shutdown_tx: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl HydrationReminder {
    /// Start polling `state` every `check_interval`
    ///
    /// The first check happens one interval after spawning. Each check applies
    /// day rollover to the shared record before evaluating `policy`.
    pub fn spawn(
        state: SharedWater,
        clock: Arc<dyn Clock>,
        mut policy: ReminderPolicy,
        check_interval: Duration,
    ) -> (Self, mpsc::Receiver<ReminderSignal>) {
        let (signal_tx, signal_rx) = mpsc::channel(SIGNAL_BUFFER);
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + check_interval, check_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let Some(signal) = check_once(&state, clock.as_ref(), &mut policy).await else {
                            continue;
                        };
                        tracing::info!(glasses = signal.glasses, goal = signal.goal, "Hydration reminder due");
                        match signal_tx.try_send(signal) {
                            Ok(()) => {}
                            Err(TrySendError::Full(_)) => {
                                tracing::debug!("Reminder receiver is behind, dropping reminder");
                            }
                            Err(TrySendError::Closed(_)) => {
                                tracing::debug!("Reminder receiver dropped, stopping task");
                                break;
                            }
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        tracing::debug!("Reminder task received shutdown signal");
                        break;
                    }
                }
            }
        });

        (
            Self {
                shutdown_tx,
                handle: Some(handle),
            },
            signal_rx,
        )
    }

    /// Whether the task has exited
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Signal shutdown and wait for the task to exit
    pub async fn stop(mut self) {
        // A full or closed channel means shutdown is already pending or done
        let _ = self.shutdown_tx.try_send(());
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!("Reminder task ended abnormally: {e}");
            }
        }
    }
}

impl Drop for HydrationReminder {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

async fn check_once(
    state: &SharedWater,
    clock: &dyn Clock,
    policy: &mut ReminderPolicy,
) -> Option<ReminderSignal> {
    let mut intake = state.lock().await;
    water::roll_over(&mut intake, clock.today());
    if !policy.evaluate(&intake, Instant::now()) {
        return None;
    }
    Some(ReminderSignal {
        fired_at: clock.now(),
        glasses: intake.glasses,
        goal: intake.goal,
    })
}
