// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for store start-up and snapshot persistence.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A store finished loading and is ready to serve.
///
/// # Log Level
/// `info!` - Important operational event
pub struct StoreOpened<'a> {
    pub backend: &'a str,
    pub location: Option<&'a str>,
    pub record_count: usize,
}

impl Display for StoreOpened<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.location {
            Some(location) => write!(
                f,
                "Opened {} store at '{}' with {} records",
                self.backend, location, self.record_count
            ),
            None => write!(
                f,
                "Opened {} store with {} records",
                self.backend, self.record_count
            ),
        }
    }
}

impl StructuredLog for StoreOpened<'_> {
    fn log(&self) {
        tracing::info!(
            backend = self.backend,
            location = self.location,
            record_count = self.record_count,
            "{}", self
        );
    }
}

/// A snapshot write is starting. Its span wraps the write so the
/// [`SnapshotWritten`] or [`SnapshotFailed`] event that follows carries
/// the path.
///
/// # Log Level
/// `debug!` - Routine, high-frequency event
pub struct SnapshotStarted<'a> {
    pub path: &'a str,
    pub record_count: usize,
}

impl Display for SnapshotStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Writing snapshot of {} records to '{}'",
            self.record_count, self.path
        )
    }
}

impl StructuredLog for SnapshotStarted<'_> {
    fn log(&self) {
        tracing::debug!(path = self.path, record_count = self.record_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "snapshot",
            span_name = name,
            path = self.path,
            record_count = self.record_count,
        )
    }
}

/// A snapshot was written to disk.
///
/// # Log Level
/// `debug!` - Routine, high-frequency event
pub struct SnapshotWritten<'a> {
    pub path: &'a str,
    pub record_count: usize,
    pub duration: std::time::Duration,
}

impl Display for SnapshotWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wrote snapshot of {} records to '{}' in {:?}",
            self.record_count, self.path, self.duration
        )
    }
}

impl StructuredLog for SnapshotWritten<'_> {
    fn log(&self) {
        tracing::debug!(
            path = self.path,
            record_count = self.record_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }
}

/// A snapshot could not be written; the in-memory change was rolled back.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct SnapshotFailed<'a> {
    pub path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for SnapshotFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to write snapshot '{}': {}", self.path, self.error)
    }
}

impl StructuredLog for SnapshotFailed<'_> {
    fn log(&self) {
        tracing::error!(path = self.path, error = %self.error, "{}", self);
    }
}
