// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod analysis;      // string properties + query interpretation
pub mod config;        // YAML config + env overrides
pub mod errors;        // error handling
pub mod models;        // records and filters
pub mod observability;
pub mod server;        // HTTP surface
pub mod storage;       // store backends
pub mod traits;        // unified abstractions
