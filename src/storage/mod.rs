// ABOUTME: Key-value persistence for the ledger record set
// ABOUTME: Pluggable backends (in-memory, SQLite) behind one async trait, plus JSON helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Storage
//!
//! One record per key, stored as JSON text. The ledger never touches the
//! store directly; callers move the whole [`RecordSet`](crate::ledger::RecordSet)
//! in and out with `load`/`save`.

/// Store factory selecting a backend from a URL
pub mod factory;
/// In-memory backend
pub mod memory;
/// Record set load/save
pub mod records;
/// SQLite backend
pub mod sqlite;

pub use factory::Store;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Minimal key-value store holding JSON text
///
/// # Examples
///
/// ```rust,no_run
/// use nutribuddy::storage::{InMemoryStore, KeyValueStore};
/// # async fn example() -> nutribuddy::errors::AppResult<()> {
/// let store = InMemoryStore::new();
/// store.set_raw("waterIntake", r#"{"glasses":3}"#).await?;
/// assert!(store.get_raw("waterIntake").await?.is_some());
/// store.remove("waterIntake").await?;
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Raw value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read
    async fn get_raw(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    async fn set_raw(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`; absent keys are not an error
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Backend name for logs
    fn backend_name(&self) -> &'static str;
}

/// Read and deserialize the JSON value under `key`
///
/// # Errors
///
/// Returns a storage error from the backend or a serialization error if the
/// stored text is not valid for `T`
pub async fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<Option<T>> {
    match store.get_raw(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` as JSON and store it under `key`
///
/// # Errors
///
/// Returns a serialization error or a storage error from the backend
pub async fn write_json<T: Serialize + Sync>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set_raw(key, &raw).await?;
    tracing::debug!(backend = store.backend_name(), key, bytes = raw.len(), "Stored record");
    Ok(())
}
