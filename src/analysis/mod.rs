// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pure string analysis: property extraction and natural-language filter
//! interpretation. Nothing in here touches storage or the network.

pub mod analyzer;
pub mod interpreter;

pub use analyzer::{analyze, content_hash};
pub use interpreter::interpret;
