// ABOUTME: Store factory for URL-based backend selection
// ABOUTME: "memory" selects the in-memory store, sqlite: URLs the SQLite store
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{InMemoryStore, KeyValueStore, SqliteStore};
use crate::config::NutriBuddyConfig;
use crate::constants::storage::MEMORY_URL;
use crate::errors::{AppError, AppResult};

/// Unified store interface
#[derive(Debug, Clone)]
pub enum Store {
    /// Ephemeral in-memory backend
    Memory(InMemoryStore),
    /// SQLite backend
    Sqlite(SqliteStore),
}

impl Store {
    /// Create a store for `database_url`
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unsupported URL scheme, or a
    /// storage error if the SQLite database cannot be opened
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let url = database_url.trim();
        if url == MEMORY_URL {
            tracing::info!("Initializing in-memory store");
            return Ok(Self::Memory(InMemoryStore::new()));
        }
        if url.starts_with("sqlite:") {
            return Ok(Self::Sqlite(SqliteStore::connect(url).await?));
        }
        Err(AppError::config(format!(
            "Unsupported database URL '{url}': expected '{MEMORY_URL}' or a sqlite: URL"
        ))
        .with_field("database_url"))
    }

    /// Create a store from the global configuration
    ///
    /// # Errors
    ///
    /// Returns an error if store initialization fails
    pub async fn from_config(config: &NutriBuddyConfig) -> AppResult<Self> {
        Self::connect(&config.storage.database_url).await
    }

    fn backend(&self) -> &dyn KeyValueStore {
        match self {
            Self::Memory(store) => store,
            Self::Sqlite(store) => store,
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for Store {
    async fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        self.backend().get_raw(key).await
    }

    async fn set_raw(&self, key: &str, value: &str) -> AppResult<()> {
        self.backend().set_raw(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.backend().remove(key).await
    }

    fn backend_name(&self) -> &'static str {
        self.backend().backend_name()
    }
}
