// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use std::sync::Arc;

use super::{JsonFileStore, MemoryStore};
use crate::config::{StorageBackend, StorageConfig};
use crate::errors::StoreError;
use crate::observability::messages::storage::StoreOpened;
use crate::observability::messages::StructuredLog;
use crate::traits::StringStore;

/// Default snapshot location when `json_file` is configured without a path
pub const DEFAULT_SNAPSHOT_PATH: &str = "data/strings.json";

/// Factory for creating the configured [`StringStore`]
pub struct StoreFactory;

impl StoreFactory {
    /// Create a store instance from configuration
    ///
    /// The `backend` field determines which store to create:
    /// - `memory` -> [`MemoryStore`]
    /// - `json_file` -> [`JsonFileStore`] at `path`, or [`DEFAULT_SNAPSHOT_PATH`]
    pub async fn create_store(config: &StorageConfig) -> Result<Arc<dyn StringStore>, StoreError> {
        match config.backend {
            StorageBackend::Memory => {
                StoreOpened {
                    backend: "memory",
                    location: None,
                    record_count: 0,
                }
                .log();
                Ok(Arc::new(MemoryStore::new()))
            }
            StorageBackend::JsonFile => {
                let path = config
                    .path
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_PATH));
                let store = JsonFileStore::open(path).await?;
                let location = store.path().display().to_string();

                StoreOpened {
                    backend: "json_file",
                    location: Some(&location),
                    record_count: store.len().await,
                }
                .log();
                Ok(Arc::new(store))
            }
        }
    }
}
