//! Key-value persistence port for serialized board snapshots.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable string key-value store.
///
/// Implementations own their retry and logging policy; callers treat a
/// failed `save` as final.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the underlying medium rejects the write.
    fn save(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing has been saved under the key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the underlying medium cannot be read.
    fn load(&self, key: &str) -> StorageResult<Option<String>>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// The key cannot be mapped onto the store's namespace.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Storage-medium failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageError {
    /// Wraps a storage-medium error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
