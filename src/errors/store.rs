// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by [`StringStore`](crate::traits::StringStore) implementations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with the same content hash already exists
    #[error("String already exists: {id}")]
    Conflict { id: String },

    /// No record with this content hash
    #[error("String does not exist: {id}")]
    NotFound { id: String },

    /// Reading or writing a snapshot file failed
    #[error("Storage I/O failed for '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A snapshot could not be encoded or decoded
    #[error("Storage snapshot is malformed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
