//! Storage records for a board.
//!
//! The field layout matches the JSON written by the browser-based board, so
//! existing saved boards load unchanged.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Persisted board record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedBoard {
    /// Columns in display order.
    pub columns: Vec<PersistedColumn>,
}

/// Persisted column record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedColumn {
    /// Column identifier.
    pub id: ColumnId,
    /// Display title.
    pub title: String,
    /// Tasks in display order.
    #[serde(default)]
    pub tasks: Vec<PersistedTask>,
}

/// Persisted task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTask {
    /// Task identifier.
    pub id: TaskId,
    /// Task content.
    pub content: String,
    /// Column the task claims to belong to.
    pub column_id: ColumnId,
}

impl PersistedBoard {
    /// Returns tasks whose stored column reference disagrees with the column
    /// that contains them.
    #[must_use]
    pub fn misplaced_tasks(&self) -> Vec<TaskId> {
        self.columns
            .iter()
            .flat_map(|column| {
                column
                    .tasks
                    .iter()
                    .filter(|task| task.column_id != column.id)
                    .map(|task| task.id.clone())
            })
            .collect()
    }

    /// Returns tasks whose content is blank and cannot be restored.
    #[must_use]
    pub fn blank_tasks(&self) -> Vec<TaskId> {
        self.columns
            .iter()
            .flat_map(|column| {
                column
                    .tasks
                    .iter()
                    .filter(|task| task.content.trim().is_empty())
                    .map(|task| task.id.clone())
            })
            .collect()
    }
}
