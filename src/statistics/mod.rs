//! Persistent quiz statistics on top of a key-value store.

mod service;
mod store;

pub use service::{StatisticService, Statistics, keys};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StorageError};
