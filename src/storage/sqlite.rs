// ABOUTME: SQLite key-value store backed by a single kv_store table
// ABOUTME: Creates the database file and table on connect; upserts on write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};
use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use std::fs;
use std::path::Path;

/// SQLite-backed store
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to `database_url` (`sqlite:path` or `sqlite::memory:`) and
    /// create the table if needed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be created or opened, or the
    /// schema cannot be applied
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let in_memory = database_url.contains(":memory:");

        if !in_memory {
            ensure_parent_dir(database_url)?;
        }

        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if in_memory || database_url.contains('?') {
            database_url.to_owned()
        } else {
            format!("{database_url}?mode=rwc")
        };

        // Every in-memory connection is its own database, so keep exactly one alive
        let options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(4)
        };

        let pool = options
            .connect(&connection_options)
            .await
            .map_err(|e| {
                AppError::storage(format!("Failed to open {database_url}: {e}")).with_source(e)
            })?;

        let store = Self { pool };
        store.migrate().await?;
        tracing::info!(database_url, "Opened SQLite store");
        Ok(store)
    }

    /// Create the key-value table
    ///
    /// # Errors
    ///
    /// Returns a storage error if the statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Failed to create kv_store table: {e}")))?;

        Ok(())
    }

    /// When `key` was last written, as stored (RFC 3339)
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails
    pub async fn updated_at(&self, key: &str) -> AppResult<Option<String>> {
        let row = sqlx::query("SELECT updated_at FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("Failed to read updated_at: {e}")))?;

        Ok(row.map(|row| row.get("updated_at")))
    }

    /// Close the pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait::async_trait]
impl KeyValueStore for SqliteStore {
    async fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        let row = sqlx::query(
            r"
            SELECT value
            FROM kv_store
            WHERE key = ?1
            ",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Failed to get {key}: {e}")))?;

        Ok(row.map(|row| row.get("value")))
    }

    async fn set_raw(&self, key: &str, value: &str) -> AppResult<()> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = ?2,
                updated_at = ?3
            ",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Failed to set {key}: {e}")))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

fn ensure_parent_dir(database_url: &str) -> AppResult<()> {
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!(
                    "Failed to create data directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }
    Ok(())
}
