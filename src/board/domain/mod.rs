//! Domain model for the task board.
//!
//! Boards, columns and tasks are plain values. All mutation happens through
//! the pure transitions on [`Board`], which keep task identifiers unique and
//! each task's column reference in step with column membership.

mod board;
mod error;
mod ids;
mod snapshot;
mod task;

pub use board::{Board, TaskPosition, default_columns};
pub use error::BoardDomainError;
pub use ids::{ColumnId, TaskContent, TaskId};
pub use snapshot::{PersistedBoard, PersistedColumn, PersistedTask};
pub use task::{Column, ColumnSeed, Task};
