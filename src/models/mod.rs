// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod filter;
mod record;

pub use filter::FilterSpec;
pub use record::{StringProperties, StringRecord};
