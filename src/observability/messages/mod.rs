// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message is a small struct with a `Display` implementation for the
//! human-readable text and a [`StructuredLog`] implementation that emits it
//! through `tracing` with the struct's fields attached as key/value pairs.
//!
//! # Organization
//!
//! * `server` - HTTP server lifecycle
//! * `storage` - store start-up and snapshot persistence
//! * `strings` - string submission, lookup, deletion and query interpretation
//!
//! # Usage Pattern
//!
//! ```rust
//! use string_analyzer::observability::messages::StructuredLog;
//! use string_analyzer::observability::messages::strings::StringCreated;
//!
//! let msg = StringCreated {
//!     id: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
//!     length: 5,
//! };
//!
//! msg.log();
//! ```

use tracing::Span;

pub mod server;
pub mod storage;
pub mod strings;

/// Emit a message as a structured `tracing` event, or open a span carrying
/// the message's fields.
///
/// Only messages that mark the start of a unit of work override `span`;
/// the rest return a disabled span.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, _name: &str) -> Span {
        Span::none()
    }
}
