//! Board store: the command surface over the current board.

use super::{
    BoardStoreConfig,
    codec::{SnapshotCodecError, decode_board, encode_board},
};
use crate::board::{
    domain::{Board, BoardDomainError, ColumnId, TaskId},
    ports::{KeyValueStore, StorageError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors from an explicit [`BoardStore::persist`] call.
#[derive(Debug, Error)]
pub enum BoardStoreError {
    /// The board could not be encoded.
    #[error(transparent)]
    Codec(#[from] SnapshotCodecError),
    /// The key-value store rejected the write.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Owns the canonical board and applies transitions to it.
///
/// Stale or invalid references are not errors here: the command returns the
/// current snapshot untouched. Every successful mutation is saved to the
/// key-value store; a failed save is logged and the in-memory board stays
/// authoritative.
///
/// A stored value that could not be read is never overwritten by an
/// automatic save. It is first copied to
/// [`BoardStoreConfig::unreadable_key`]; if that copy cannot be made, or the
/// load itself failed, automatic saves stay held until [`Self::persist`]
/// succeeds.
pub struct BoardStore<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    config: BoardStoreConfig,
    board: Arc<Board>,
    autosave_held: bool,
}

impl<S> BoardStore<S>
where
    S: KeyValueStore,
{
    /// Opens the board saved under the configured key.
    ///
    /// Falls back to a board built from `config.default_columns` when nothing
    /// is stored or the stored value cannot be used. Stored tasks with blank
    /// content are dropped and the rest of the board is kept.
    #[must_use]
    pub fn open(store: Arc<S>, config: BoardStoreConfig) -> Self {
        let loaded = load_board(&*store, &config);
        Self {
            store,
            config,
            board: Arc::new(loaded.board),
            autosave_held: loaded.autosave_held,
        }
    }

    /// Returns the current board snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    /// Returns `true` while automatic saves are suspended to protect a stored
    /// value that could not be read.
    #[must_use]
    pub const fn is_autosave_held(&self) -> bool {
        self.autosave_held
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardStoreConfig {
        &self.config
    }

    /// Appends a task with `content` to the tail of `column_id`.
    ///
    /// Unknown columns and blank content leave the board unchanged.
    pub fn add_task(&mut self, column_id: &ColumnId, content: &str) -> Arc<Board> {
        let outcome = self
            .board
            .with_task_added(column_id, content)
            .map(|(next, task_id)| {
                tracing::debug!(column = %column_id, task = %task_id, "task added");
                next
            });
        self.commit("add_task", outcome)
    }

    /// Removes a task from whichever column holds it.
    ///
    /// Unknown task identifiers leave the board unchanged.
    pub fn delete_task(&mut self, task_id: &TaskId) -> Arc<Board> {
        let outcome = self.board.without_task(task_id);
        self.commit("delete_task", outcome)
    }

    /// Moves a task to `dest_index` within `dest_column_id`.
    ///
    /// Works for both same-column reorders and cross-column moves; see
    /// [`Board::with_task_moved`] for the index rules. Unknown task or column
    /// identifiers leave the board unchanged.
    pub fn move_task(
        &mut self,
        task_id: &TaskId,
        dest_column_id: &ColumnId,
        dest_index: usize,
    ) -> Arc<Board> {
        let outcome = self
            .board
            .with_task_moved(task_id, dest_column_id, dest_index);
        self.commit("move_task", outcome)
    }

    /// Saves the current snapshot, reporting any failure.
    ///
    /// Intended for shutdown, when the caller wants to know whether the last
    /// board reached storage. A successful write releases held automatic
    /// saves.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError`] when encoding or the write fails.
    pub fn persist(&mut self) -> Result<(), BoardStoreError> {
        self.write()?;
        if self.autosave_held {
            tracing::info!(key = %self.config.storage_key, "automatic saves resumed");
            self.autosave_held = false;
        }
        Ok(())
    }

    fn write(&self) -> Result<(), BoardStoreError> {
        let encoded = encode_board(&self.board)?;
        self.store.save(&self.config.storage_key, &encoded)?;
        Ok(())
    }

    fn commit(
        &mut self,
        operation: &'static str,
        outcome: Result<Board, BoardDomainError>,
    ) -> Arc<Board> {
        match outcome {
            Ok(next) => {
                let changed = next != *self.board;
                if changed {
                    self.board = Arc::new(next);
                }
                if changed || self.config.persist_unchanged {
                    self.persist_quietly(operation);
                }
            }
            Err(err) => {
                tracing::debug!(operation, error = %err, "board transition ignored");
            }
        }
        self.snapshot()
    }

    fn persist_quietly(&self, operation: &'static str) {
        if self.autosave_held {
            tracing::debug!(operation, key = %self.config.storage_key, "automatic save held");
            return;
        }
        if let Err(err) = self.write() {
            tracing::warn!(
                operation,
                key = %self.config.storage_key,
                error = %err,
                "failed to persist board"
            );
        }
    }
}

struct LoadedBoard {
    board: Board,
    autosave_held: bool,
}

impl LoadedBoard {
    const fn ready(board: Board) -> Self {
        Self {
            board,
            autosave_held: false,
        }
    }
}

fn load_board(store: &impl KeyValueStore, config: &BoardStoreConfig) -> LoadedBoard {
    let key = config.storage_key.as_str();
    match store.load(key) {
        Ok(Some(raw)) => match decode_board(&raw) {
            Ok(decoded) => {
                for task_id in &decoded.misplaced {
                    tracing::warn!(key, task = %task_id, "repaired task column reference");
                }
                for task_id in &decoded.discarded {
                    tracing::warn!(key, task = %task_id, "dropped stored task with blank content");
                }
                LoadedBoard::ready(decoded.board)
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "stored board unusable, starting fresh");
                set_aside(store, config, &raw)
            }
        },
        Ok(None) => {
            tracing::info!(key, "no stored board, starting fresh");
            LoadedBoard::ready(initial_board(config))
        }
        Err(err) => {
            tracing::warn!(
                key,
                error = %err,
                "failed to load board, starting fresh with automatic saves held"
            );
            LoadedBoard {
                board: initial_board(config),
                autosave_held: true,
            }
        }
    }
}

/// Copies an unreadable stored value to its backup key so later saves cannot
/// destroy it.
fn set_aside(store: &impl KeyValueStore, config: &BoardStoreConfig, raw: &str) -> LoadedBoard {
    let backup_key = config.unreadable_key();
    let autosave_held = match store.save(&backup_key, raw) {
        Ok(()) => {
            tracing::warn!(key = %backup_key, "unreadable board copied aside");
            false
        }
        Err(err) => {
            tracing::warn!(
                key = %backup_key,
                error = %err,
                "failed to copy unreadable board, automatic saves held"
            );
            true
        }
    };
    LoadedBoard {
        board: initial_board(config),
        autosave_held,
    }
}

fn initial_board(config: &BoardStoreConfig) -> Board {
    Board::from_seeds(config.default_columns.iter().cloned()).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "configured columns rejected, using built-in layout");
        Board::default()
    })
}
