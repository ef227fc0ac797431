// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Water intake commands for nutribuddy-cli
// ABOUTME: Adjusts the daily counter and runs the hydration reminder in the foreground

use crate::helpers::display::display_water;
use nutribuddy::constants::water::GOAL_PRESETS;
use nutribuddy::errors::{AppError, AppResult};
use nutribuddy::session::NutritionSession;
use tokio::signal;
use tracing::info;

/// Add a glass and save
pub async fn add(session: &NutritionSession) -> AppResult<()> {
    display_water(&session.add_water().await);
    session.save().await
}

/// Remove a glass and save
pub async fn remove(session: &NutritionSession) -> AppResult<()> {
    display_water(&session.remove_water().await);
    session.save().await
}

/// Set the goal and save
pub async fn goal(session: &NutritionSession, glasses: u32) -> AppResult<()> {
    display_water(&session.set_water_goal(glasses).await?);
    session.save().await
}

/// Show today's intake
pub async fn status(session: &NutritionSession) {
    display_water(&session.water_status().await);
    let presets: Vec<String> = GOAL_PRESETS.iter().map(ToString::to_string).collect();
    println!("   Goal presets: {} glasses", presets.join(" / "));
}

/// Print reminders until Ctrl-C, then stop the task
pub async fn remind(session: &NutritionSession) -> AppResult<()> {
    let (reminder, mut signals) = session.start_reminder();
    info!("Hydration reminder running; press Ctrl-C to stop");
    display_water(&session.water_status().await);

    loop {
        tokio::select! {
            received = signals.recv() => {
                let Some(due) = received else { break };
                println!("\n[{}] {}", due.fired_at.format("%H:%M"), due.message());
            }
            result = signal::ctrl_c() => {
                result.map_err(|e| AppError::internal("Failed to listen for Ctrl-C").with_source(e))?;
                break;
            }
        }
    }

    reminder.stop().await;
    session.save().await
}
