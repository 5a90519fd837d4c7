//! The board operations a drag session is allowed to drive.

use crate::board::{
    domain::{Board, ColumnId, TaskId},
    ports::KeyValueStore,
    services::BoardStore,
};
use std::sync::Arc;

/// Board command seam used by [`super::DragSession`].
pub trait BoardCommands {
    /// Returns the current board snapshot.
    fn board(&self) -> Arc<Board>;

    /// Moves a task; see [`BoardStore::move_task`].
    fn move_task(
        &mut self,
        task_id: &TaskId,
        dest_column_id: &ColumnId,
        dest_index: usize,
    ) -> Arc<Board>;
}

impl<S> BoardCommands for BoardStore<S>
where
    S: KeyValueStore,
{
    fn board(&self) -> Arc<Board> {
        self.snapshot()
    }

    fn move_task(
        &mut self,
        task_id: &TaskId,
        dest_column_id: &ColumnId,
        dest_index: usize,
    ) -> Arc<Board> {
        Self::move_task(self, task_id, dest_column_id, dest_index)
    }
}
