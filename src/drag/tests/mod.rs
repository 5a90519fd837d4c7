//! Unit tests for drag gesture handling.


use crate::board::domain::{
    Board, ColumnId, PersistedBoard, PersistedColumn, PersistedTask, TaskId,
};
use crate::drag::BoardCommands;
use std::sync::Arc;

/// Board command fake that applies moves and records each call.
pub(super) struct RecordingBoard {
    board: Arc<Board>,
    pub(super) moves: Vec<(TaskId, ColumnId, usize)>,
}

impl RecordingBoard {
    pub(super) fn new(layout: &[(&str, &[&str])]) -> Self {
        let persisted = PersistedBoard {
            columns: layout
                .iter()
                .map(|(column_id, task_ids)| PersistedColumn {
                    id: ColumnId::new(*column_id),
                    title: (*column_id).to_owned(),
                    tasks: task_ids
                        .iter()
                        .map(|task_id| PersistedTask {
                            id: TaskId::new(*task_id),
                            content: format!("Task {task_id}"),
                            column_id: ColumnId::new(*column_id),
                        })
                        .collect(),
                })
                .collect(),
        };
        let board = Board::from_persisted(persisted).expect("fixture board should be valid");
        Self {
            board: Arc::new(board),
            moves: Vec::new(),
        }
    }

    pub(super) fn ids_in(&self, column_id: &str) -> Vec<String> {
        self.board
            .column(&ColumnId::new(column_id))
            .map(|column| {
                column
                    .tasks()
                    .iter()
                    .map(|task| task.id().as_str().to_owned())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl BoardCommands for RecordingBoard {
    fn board(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    fn move_task(
        &mut self,
        task_id: &TaskId,
        dest_column_id: &ColumnId,
        dest_index: usize,
    ) -> Arc<Board> {
        self.moves
            .push((task_id.clone(), dest_column_id.clone(), dest_index));
        if let Ok(next) = self.board.with_task_moved(task_id, dest_column_id, dest_index) {
            self.board = Arc::new(next);
        }
        Arc::clone(&self.board)
    }
}
