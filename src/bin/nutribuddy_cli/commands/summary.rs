// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Dashboard command for nutribuddy-cli

use crate::helpers::display::display_summary;
use nutribuddy::session::NutritionSession;

/// Print today's dashboard
pub async fn show(session: &NutritionSession) {
    display_summary(&session.summary().await);
}
