//! Board store configuration.

use crate::board::domain::{ColumnSeed, default_columns};

/// Key under which the board is saved unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "kanban-board";

/// Suffix appended to the storage key when an unreadable value is set aside.
pub const UNREADABLE_SUFFIX: &str = ".unreadable";

/// Configuration for [`super::BoardStore`].
///
/// # Examples
///
/// ```
/// use taskboard::board::services::BoardStoreConfig;
///
/// let config = BoardStoreConfig::default();
/// assert_eq!(config.storage_key, "kanban-board");
/// assert!(!config.persist_unchanged);
///
/// let custom = BoardStoreConfig::default()
///     .with_storage_key("sprint-12")
///     .with_persist_unchanged(true);
/// assert_eq!(custom.storage_key, "sprint-12");
/// assert_eq!(custom.unreadable_key(), "sprint-12.unreadable");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStoreConfig {
    /// Key the serialized board is saved under.
    pub storage_key: String,
    /// Columns of a board created when nothing usable is stored.
    pub default_columns: Vec<ColumnSeed>,
    /// Whether a transition that leaves the board unchanged, such as
    /// dropping a task on its own position, still writes to storage.
    pub persist_unchanged: bool,
}

impl Default for BoardStoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            default_columns: default_columns(),
            persist_unchanged: false,
        }
    }
}

impl BoardStoreConfig {
    /// Sets the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the columns used for a fresh board.
    #[must_use]
    pub fn with_default_columns(mut self, columns: impl IntoIterator<Item = ColumnSeed>) -> Self {
        self.default_columns = columns.into_iter().collect();
        self
    }

    /// Returns the key an unreadable stored board is copied to before the
    /// store starts over.
    #[must_use]
    pub fn unreadable_key(&self) -> String {
        format!("{}{UNREADABLE_SUFFIX}", self.storage_key)
    }

    /// Sets whether unchanged transitions are persisted.
    #[must_use]
    pub const fn with_persist_unchanged(mut self, persist: bool) -> Self {
        self.persist_unchanged = persist;
        self
    }
}
