// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod factory;
pub mod json_file;
pub mod memory;

pub use factory::StoreFactory;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
