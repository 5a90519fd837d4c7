//! Error types for board transitions and snapshot reconstruction.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned by board transitions and persisted-board validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// No column with the identifier exists on the board.
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnId),

    /// No task with the identifier exists on the board.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),

    /// The task content is empty after trimming.
    #[error("task content must not be empty")]
    EmptyTaskContent,

    /// Two columns share an identifier.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(ColumnId),

    /// Two tasks share an identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
}
