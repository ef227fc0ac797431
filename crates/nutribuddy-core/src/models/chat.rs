// ABOUTME: Chat transcript message record for the scripted assistant
// ABOUTME: Messages are append-only and never edited or deleted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Typed by the user
    User,
    /// Produced by the assistant
    Assistant,
}

/// One message in the transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Unique message ID
    pub id: String,
    /// Author
    #[serde(rename = "type")]
    pub role: ChatRole,
    /// Message text, possibly multi-line
    pub content: String,
    /// When the message was appended
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message stamped at `timestamp`
    #[must_use]
    pub fn user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(ChatRole::User, content, timestamp)
    }

    /// Create an assistant message stamped at `timestamp`
    #[must_use]
    pub fn assistant(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(ChatRole::Assistant, content, timestamp)
    }

    fn new(role: ChatRole, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp,
        }
    }
}
