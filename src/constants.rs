// ABOUTME: Application-wide constants for the NutriBuddy ledger
// ABOUTME: Re-exports the record limits from the core crate and adds service identifiers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

pub use nutribuddy_core::constants::{assistant, calories, profile, storage_keys, water};

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported at startup
    pub const NUTRIBUDDY: &str = "nutribuddy";
}

/// Storage backend defaults
pub mod storage {
    /// File name of the on-disk store inside the data directory
    pub const DATABASE_FILE_NAME: &str = "nutribuddy.db";

    /// URL selecting the ephemeral in-memory backend
    pub const MEMORY_URL: &str = "memory";
}
