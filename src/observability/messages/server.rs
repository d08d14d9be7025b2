// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for HTTP server lifecycle events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use tracing::Span;

/// Server bound its listener and is accepting connections.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerStarted<'a> {
    pub addr: SocketAddr,
    pub store: &'a str,
}

impl Display for ServerStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Server listening on http://{} with {} store",
            self.addr, self.store
        )
    }
}

impl StructuredLog for ServerStarted<'_> {
    fn log(&self) {
        tracing::info!(addr = %self.addr, store = self.store, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("server", span_name = name, addr = %self.addr, store = self.store)
    }
}

/// Server received a shutdown request and is draining connections.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ServerStopping<'a> {
    pub addr: SocketAddr,
    pub reason: &'a str,
}

impl Display for ServerStopping<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Server on {} shutting down: {}", self.addr, self.reason)
    }
}

impl StructuredLog for ServerStopping<'_> {
    fn log(&self) {
        tracing::info!(addr = %self.addr, reason = self.reason, "{}", self);
    }
}

/// `axum::serve` returned an error.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ServerFailed<'a> {
    pub addr: SocketAddr,
    pub error: &'a dyn std::error::Error,
}

impl Display for ServerFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Server on {} failed: {}", self.addr, self.error)
    }
}

impl StructuredLog for ServerFailed<'_> {
    fn log(&self) {
        tracing::error!(addr = %self.addr, error = %self.error, "{}", self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_started_display() {
        let msg = ServerStarted {
            addr: "127.0.0.1:3000".parse().unwrap(),
            store: "memory",
        };
        assert_eq!(
            msg.to_string(),
            "Server listening on http://127.0.0.1:3000 with memory store"
        );
    }

    #[test]
    fn test_server_stopping_display() {
        let msg = ServerStopping {
            addr: "127.0.0.1:3000".parse().unwrap(),
            reason: "ctrl-c",
        };
        assert_eq!(msg.to_string(), "Server on 127.0.0.1:3000 shutting down: ctrl-c");
    }
}
