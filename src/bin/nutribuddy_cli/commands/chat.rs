// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Chat command for nutribuddy-cli
// ABOUTME: Sends one question to the assistant, or lists suggested questions

use crate::helpers::display::display_message;
use nutribuddy::errors::AppResult;
use nutribuddy::session::NutritionSession;
use nutribuddy_intelligence::responder::QUICK_QUESTIONS;

/// Ask one question
pub async fn ask(session: &mut NutritionSession, text: &str) -> AppResult<()> {
    let reply = session.send_message(text).await?;
    display_message(reply);
    Ok(())
}

/// Show the greeting and the quick questions
pub fn suggest(session: &NutritionSession) {
    for message in session.transcript() {
        display_message(message);
    }
    println!("\nTry asking:");
    for question in QUICK_QUESTIONS {
        println!("   nutribuddy-cli chat \"{question}\"");
    }
}
