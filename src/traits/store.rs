// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::{FilterSpec, StringRecord};

/// Persistence for [`StringRecord`]s, keyed by content hash.
///
/// Implementations must make `create` atomic with respect to the existence
/// check: two concurrent creates of the same id yield one success and one
/// [`StoreError::Conflict`].
#[async_trait]
pub trait StringStore: Send + Sync {
    /// Insert a new record. Fails with `Conflict` if the id is taken.
    async fn create(&self, record: StringRecord) -> Result<StringRecord, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<StringRecord>, StoreError>;

    /// Every record matching `filter`, newest first.
    async fn find_many(&self, filter: &FilterSpec) -> Result<Vec<StringRecord>, StoreError>;

    /// Remove a record. Fails with `NotFound` if the id is absent.
    async fn delete_by_id(&self, id: &str) -> Result<StringRecord, StoreError>;

    fn name(&self) -> &'static str;
}
