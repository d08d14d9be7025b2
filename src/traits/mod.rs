pub mod store;

pub use store::StringStore;
