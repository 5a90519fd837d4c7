//! Port contracts for board persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod storage;

pub use storage::{KeyValueStore, StorageError, StorageResult};

#[cfg(test)]
pub use storage::MockKeyValueStore;
