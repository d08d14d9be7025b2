// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::Instrument;

use crate::errors::StoreError;
use crate::models::{FilterSpec, StringRecord};
use crate::observability::messages::storage::{SnapshotFailed, SnapshotStarted, SnapshotWritten};
use crate::observability::messages::StructuredLog;
use crate::storage::memory::MemoryStore;
use crate::traits::StringStore;

/// A [`MemoryStore`] that snapshots itself to a JSON file.
///
/// The whole record set is rewritten after every successful mutation, via a
/// temporary file and a rename so a crash never leaves a half-written
/// snapshot behind. If the write fails the mutation is rolled back and the
/// error returned, keeping memory and disk in agreement.
pub struct JsonFileStore {
    path: PathBuf,
    records: MemoryStore,
    // Serializes mutate-then-persist so snapshots are written in order.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the snapshot at `path`, starting empty if it does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match fs::read(&path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Vec::new(),
            Ok(bytes) => serde_json::from_slice::<Vec<StringRecord>>(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::io(path.display().to_string(), e)),
        };

        Ok(Self {
            path,
            records: MemoryStore::from_records(records),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn len(&self) -> usize {
        self.records.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.records.is_empty().await
    }

    async fn persist(&self) -> Result<(), StoreError> {
        let snapshot = self.records.snapshot().await;
        let path_display = self.path.display().to_string();

        let start_msg = SnapshotStarted {
            path: &path_display,
            record_count: snapshot.len(),
        };
        let span = start_msg.span("persist");
        span.in_scope(|| start_msg.log());

        self.write_snapshot(&snapshot, &path_display)
            .instrument(span)
            .await
    }

    async fn write_snapshot(
        &self,
        snapshot: &[StringRecord],
        path_display: &str,
    ) -> Result<(), StoreError> {
        let start = Instant::now();
        let bytes = serde_json::to_vec_pretty(snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent.display().to_string(), e))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &bytes)
            .await
            .map_err(|e| StoreError::io(tmp_path.display().to_string(), e))?;
        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| StoreError::io(path_display, e))?;

        SnapshotWritten {
            path: path_display,
            record_count: snapshot.len(),
            duration: start.elapsed(),
        }
        .log();
        Ok(())
    }

    fn log_failure(&self, error: &StoreError) {
        SnapshotFailed {
            path: &self.path.display().to_string(),
            error,
        }
        .log();
    }
}

#[async_trait]
impl StringStore for JsonFileStore {
    async fn create(&self, record: StringRecord) -> Result<StringRecord, StoreError> {
        let _guard = self.write_lock.lock().await;
        let created = self.records.create(record).await?;

        if let Err(e) = self.persist().await {
            self.log_failure(&e);
            self.records.remove_entry(&created.id).await;
            return Err(e);
        }
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<StringRecord>, StoreError> {
        self.records.find_by_id(id).await
    }

    async fn find_many(&self, filter: &FilterSpec) -> Result<Vec<StringRecord>, StoreError> {
        self.records.find_many(filter).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<StringRecord, StoreError> {
        let _guard = self.write_lock.lock().await;
        let entry = self
            .records
            .remove_entry(id)
            .await
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        if let Err(e) = self.persist().await {
            self.log_failure(&e);
            self.records.restore_entry(entry).await;
            return Err(e);
        }
        Ok(entry.record)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}
