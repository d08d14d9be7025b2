// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for string submission, lookup, deletion and query
//! interpretation.

use crate::models::FilterSpec;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A new string was analyzed and stored.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use string_analyzer::observability::messages::strings::StringCreated;
///
/// let msg = StringCreated {
///     id: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
///     length: 5,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct StringCreated<'a> {
    pub id: &'a str,
    pub length: usize,
}

impl Display for StringCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Stored string {} (length={})", short_id(self.id), self.length)
    }
}

impl StructuredLog for StringCreated<'_> {
    fn log(&self) {
        tracing::info!(id = self.id, length = self.length, "{}", self);
    }
}

/// A submission was rejected because the string is already stored.
///
/// # Log Level
/// `warn!` - Client error worth noticing
pub struct StringAlreadyExists<'a> {
    pub id: &'a str,
}

impl Display for StringAlreadyExists<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "String {} already exists", short_id(self.id))
    }
}

impl StructuredLog for StringAlreadyExists<'_> {
    fn log(&self) {
        tracing::warn!(id = self.id, "{}", self);
    }
}

/// A string was deleted.
///
/// # Log Level
/// `info!` - Important operational event
pub struct StringDeleted<'a> {
    pub id: &'a str,
}

impl Display for StringDeleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Deleted string {}", short_id(self.id))
    }
}

impl StructuredLog for StringDeleted<'_> {
    fn log(&self) {
        tracing::info!(id = self.id, "{}", self);
    }
}

/// A natural-language query produced a filter.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct QueryInterpreted<'a> {
    pub query: &'a str,
    pub filter: &'a FilterSpec,
}

impl Display for QueryInterpreted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Interpreted query '{}' as {:?}", self.query, self.filter)
    }
}

impl StructuredLog for QueryInterpreted<'_> {
    fn log(&self) {
        tracing::debug!(query = self.query, filter = ?self.filter, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("query_interpreted", span_name = name, query = self.query)
    }
}

/// A natural-language query matched no rule.
///
/// # Log Level
/// `warn!` - Client error worth noticing
pub struct QueryNotInterpreted<'a> {
    pub query: &'a str,
}

impl Display for QueryNotInterpreted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No filters recognized in query '{}'", self.query)
    }
}

impl StructuredLog for QueryNotInterpreted<'_> {
    fn log(&self) {
        tracing::warn!(query = self.query, "{}", self);
    }
}

/// A filter was rejected because its length bounds contradict each other.
///
/// # Log Level
/// `warn!` - Client error worth noticing
pub struct FilterConflict {
    pub min_length: i64,
    pub max_length: i64,
}

impl Display for FilterConflict {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Conflicting filters: min_length={} exceeds max_length={}",
            self.min_length, self.max_length
        )
    }
}

impl StructuredLog for FilterConflict {
    fn log(&self) {
        tracing::warn!(
            min_length = self.min_length,
            max_length = self.max_length,
            "{}", self
        );
    }
}

/// A store operation failed for a reason other than a conflict or a
/// missing record; the client receives a 500.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct StorageFailure<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for StorageFailure<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Storage failure while handling request: {}", self.error)
    }
}

impl StructuredLog for StorageFailure<'_> {
    fn log(&self) {
        tracing::error!(error = %self.error, "{}", self);
    }
}

fn short_id(id: &str) -> &str {
    id.get(..12).unwrap_or(id)
}
