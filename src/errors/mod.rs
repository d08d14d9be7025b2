// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod server;
mod store;

pub use config::{ConfigError, ValidationError};
pub use server::ServerError;
pub use store::StoreError;
