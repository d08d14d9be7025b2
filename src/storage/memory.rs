// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::models::{FilterSpec, StringRecord};
use crate::traits::StringStore;

/// A record plus the order in which it was inserted.
///
/// Timestamps alone can tie within a clock tick, so the sequence number
/// breaks ties when ordering newest first.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) record: StringRecord,
    pub(crate) seq: u64,
}

#[derive(Debug, Default)]
struct Inner {
    records: HashMap<String, Entry>,
    next_seq: u64,
}

/// In-process [`StringStore`] guarded by a single `RwLock`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `records`, oldest first.
    ///
    /// Later duplicates of an id are ignored.
    pub fn from_records(records: impl IntoIterator<Item = StringRecord>) -> Self {
        let mut inner = Inner::default();
        for record in records {
            if inner.records.contains_key(&record.id) {
                continue;
            }
            let seq = inner.next_seq;
            inner.next_seq += 1;
            inner.records.insert(record.id.clone(), Entry { record, seq });
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Every record in insertion order, oldest first.
    pub async fn snapshot(&self) -> Vec<StringRecord> {
        let inner = self.inner.read().await;
        let mut entries: Vec<&Entry> = inner.records.values().collect();
        entries.sort_by_key(|entry| entry.seq);
        entries.into_iter().map(|entry| entry.record.clone()).collect()
    }

    /// Put back an entry removed by [`remove_entry`](Self::remove_entry),
    /// keeping its original position in the ordering.
    pub(crate) async fn restore_entry(&self, entry: Entry) {
        let mut inner = self.inner.write().await;
        inner.records.insert(entry.record.id.clone(), entry);
    }

    pub(crate) async fn remove_entry(&self, id: &str) -> Option<Entry> {
        self.inner.write().await.records.remove(id)
    }
}

#[async_trait]
impl StringStore for MemoryStore {
    async fn create(&self, record: StringRecord) -> Result<StringRecord, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.records.contains_key(&record.id) {
            return Err(StoreError::Conflict { id: record.id });
        }

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.records.insert(
            record.id.clone(),
            Entry {
                record: record.clone(),
                seq,
            },
        );
        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<StringRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.records.get(id).map(|entry| entry.record.clone()))
    }

    async fn find_many(&self, filter: &FilterSpec) -> Result<Vec<StringRecord>, StoreError> {
        let inner = self.inner.read().await;
        let mut matching: Vec<&Entry> = inner
            .records
            .values()
            .filter(|entry| filter.matches(&entry.record))
            .collect();

        matching.sort_by(|a, b| {
            b.record
                .created_at
                .cmp(&a.record.created_at)
                .then(b.seq.cmp(&a.seq))
        });

        Ok(matching.into_iter().map(|entry| entry.record.clone()).collect())
    }

    async fn delete_by_id(&self, id: &str) -> Result<StringRecord, StoreError> {
        self.remove_entry(id)
            .await
            .map(|entry| entry.record)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
