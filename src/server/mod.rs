// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! HTTP surface: routing, handlers and server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::errors::ServerError;
use crate::observability::messages::server::{ServerFailed, ServerStarted, ServerStopping};
use crate::observability::messages::StructuredLog;
use crate::traits::StringStore;

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

#[cfg(test)]
mod integration_tests;

pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use state::AppState;

/// A running HTTP server.
///
/// Dropping the handle cancels the server; use [`Server::wait`] to block
/// until it has drained.
pub struct Server {
    addr: SocketAddr,
    cancel: CancellationToken,
    task: Option<JoinHandle<Result<(), std::io::Error>>>,
}

impl Server {
    /// Bind `addr` and start serving in a background task.
    ///
    /// Port 0 binds an ephemeral port; [`Server::addr`] reports the real one.
    pub async fn start(addr: SocketAddr, store: Arc<dyn StringStore>) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let addr = listener.local_addr()?;

        let started = ServerStarted {
            addr,
            store: store.name(),
        };
        started.log();
        let span = started.span("http_server");

        let app = router(AppState::new(store));
        let cancel = CancellationToken::new();
        let shutdown = cancel.clone();

        let task = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async move { shutdown.cancelled().await })
                .await;
            if let Err(e) = &result {
                ServerFailed { addr, error: e }.log();
            }
            result
        }
        .instrument(span));

        Ok(Self {
            addr,
            cancel,
            task: Some(task),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Ask the server to stop accepting connections and drain.
    pub fn shutdown(&self, reason: &str) {
        if !self.cancel.is_cancelled() {
            ServerStopping {
                addr: self.addr,
                reason,
            }
            .log();
            self.cancel.cancel();
        }
    }

    /// Wait for the server task to finish.
    pub async fn wait(mut self) -> Result<(), ServerError> {
        match self.task.take() {
            Some(task) => Ok(task.await??),
            None => Ok(()),
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
