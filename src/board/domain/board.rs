//! Board aggregate and its pure transition functions.
//!
//! Every transition borrows the current board and returns a fresh value, so
//! a caller holding an earlier snapshot never observes a partial update.

use super::{
    BoardDomainError, Column, ColumnId, ColumnSeed, PersistedBoard, PersistedColumn,
    PersistedTask, Task, TaskContent, TaskId,
};
use std::collections::HashSet;

/// Returns the column layout a new board starts with.
#[must_use]
pub fn default_columns() -> Vec<ColumnSeed> {
    vec![
        ColumnSeed::new("todo", "To Do"),
        ColumnSeed::new("in-progress", "In Progress"),
        ColumnSeed::new("done", "Done"),
    ]
}

/// Where a task currently sits on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPosition {
    /// Identifier of the containing column.
    pub column_id: ColumnId,
    /// Zero-based index within the column.
    pub index: usize,
}

/// The complete ordered set of columns and their tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Column>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            columns: default_columns().into_iter().map(Column::empty).collect(),
        }
    }
}

impl Board {
    /// Creates a board with empty columns in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateColumn`] when two seeds share an
    /// identifier.
    pub fn from_seeds(seeds: impl IntoIterator<Item = ColumnSeed>) -> Result<Self, BoardDomainError> {
        let mut seen = HashSet::new();
        let mut columns = Vec::new();
        for seed in seeds {
            if !seen.insert(seed.id.clone()) {
                return Err(BoardDomainError::DuplicateColumn(seed.id));
            }
            columns.push(Column::empty(seed));
        }
        Ok(Self { columns })
    }

    /// Rebuilds a board from persisted data.
    ///
    /// Column membership is authoritative: a task whose stored column
    /// reference disagrees with its containing column is reassigned to the
    /// containing column. Tasks with blank content are dropped and the rest of
    /// the board is kept. Use [`PersistedBoard::misplaced_tasks`] and
    /// [`PersistedBoard::blank_tasks`] to find out which tasks were affected.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateColumn`] or
    /// [`BoardDomainError::DuplicateTask`] when identifiers repeat.
    pub fn from_persisted(data: PersistedBoard) -> Result<Self, BoardDomainError> {
        let mut column_ids = HashSet::new();
        let mut task_ids = HashSet::new();
        let mut columns = Vec::with_capacity(data.columns.len());

        for persisted_column in data.columns {
            if !column_ids.insert(persisted_column.id.clone()) {
                return Err(BoardDomainError::DuplicateColumn(persisted_column.id));
            }
            let mut tasks = Vec::with_capacity(persisted_column.tasks.len());
            for persisted_task in persisted_column.tasks {
                let Ok(content) = TaskContent::new(&persisted_task.content) else {
                    continue;
                };
                if !task_ids.insert(persisted_task.id.clone()) {
                    return Err(BoardDomainError::DuplicateTask(persisted_task.id));
                }
                tasks.push(Task::new(
                    persisted_task.id,
                    content,
                    persisted_column.id.clone(),
                ));
            }
            columns.push(Column::with_tasks(
                persisted_column.id,
                persisted_column.title,
                tasks,
            ));
        }

        Ok(Self { columns })
    }

    /// Converts the board into its storage record.
    #[must_use]
    pub fn to_persisted(&self) -> PersistedBoard {
        PersistedBoard {
            columns: self
                .columns
                .iter()
                .map(|column| PersistedColumn {
                    id: column.id().clone(),
                    title: column.title().to_owned(),
                    tasks: column
                        .tasks()
                        .iter()
                        .map(|task| PersistedTask {
                            id: task.id().clone(),
                            content: task.content().as_str().to_owned(),
                            column_id: task.column_id().clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column with the given identifier.
    #[must_use]
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == column_id)
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn find_task(&self, task_id: &TaskId) -> Option<&Task> {
        self.columns
            .iter()
            .flat_map(Column::tasks)
            .find(|task| task.id() == task_id)
    }

    /// Returns the containing column and index of a task.
    #[must_use]
    pub fn locate_task(&self, task_id: &TaskId) -> Option<TaskPosition> {
        self.columns.iter().find_map(|column| {
            column.position_of(task_id).map(|index| TaskPosition {
                column_id: column.id().clone(),
                index,
            })
        })
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Appends a new task to the tail of a column.
    ///
    /// Returns the new board together with the generated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownColumn`] when the column does not
    /// exist or [`BoardDomainError::EmptyTaskContent`] when the content is
    /// blank after trimming.
    pub fn with_task_added(
        &self,
        column_id: &ColumnId,
        content: &str,
    ) -> Result<(Self, TaskId), BoardDomainError> {
        let column_index = self
            .column_index(column_id)
            .ok_or_else(|| BoardDomainError::UnknownColumn(column_id.clone()))?;
        let task_content = TaskContent::new(content)?;
        let task_id = self.fresh_task_id();

        let mut next = self.clone();
        let column = next
            .columns
            .get_mut(column_index)
            .ok_or_else(|| BoardDomainError::UnknownColumn(column_id.clone()))?;
        column.push(Task::new(task_id.clone(), task_content, column_id.clone()));
        Ok((next, task_id))
    }

    /// Removes a task from whichever column contains it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownTask`] when no task has the
    /// identifier.
    pub fn without_task(&self, task_id: &TaskId) -> Result<Self, BoardDomainError> {
        if self.find_task(task_id).is_none() {
            return Err(BoardDomainError::UnknownTask(task_id.clone()));
        }
        let mut next = self.clone();
        for column in &mut next.columns {
            column.retain_except(task_id);
        }
        Ok(next)
    }

    /// Moves a task to `dest_index` within `dest_column_id`.
    ///
    /// The task is first removed from its current column and then inserted
    /// into the destination, with `dest_index` clamped to the destination's
    /// length at that point. For a same-column reorder this gives array-move
    /// semantics: the largest reachable index is the original length minus
    /// one.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownTask`] or
    /// [`BoardDomainError::UnknownColumn`] when either reference is stale.
    pub fn with_task_moved(
        &self,
        task_id: &TaskId,
        dest_column_id: &ColumnId,
        dest_index: usize,
    ) -> Result<Self, BoardDomainError> {
        let unknown_task = || BoardDomainError::UnknownTask(task_id.clone());
        let unknown_column = || BoardDomainError::UnknownColumn(dest_column_id.clone());

        let (origin_index, task_index) = self.task_slot(task_id).ok_or_else(unknown_task)?;
        let dest_column_index = self.column_index(dest_column_id).ok_or_else(unknown_column)?;

        let mut next = self.clone();
        let mut task = next
            .columns
            .get_mut(origin_index)
            .and_then(|column| column.take(task_index))
            .ok_or_else(unknown_task)?;
        task.reassign(dest_column_id.clone());
        next.columns
            .get_mut(dest_column_index)
            .ok_or_else(unknown_column)?
            .insert_clamped(dest_index, task);
        Ok(next)
    }

    fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|column| column.id() == column_id)
    }

    fn task_slot(&self, task_id: &TaskId) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(column_index, column)| {
                column
                    .position_of(task_id)
                    .map(|task_index| (column_index, task_index))
            })
    }

    fn fresh_task_id(&self) -> TaskId {
        loop {
            let candidate = TaskId::generate();
            if self.find_task(&candidate).is_none() {
                return candidate;
            }
        }
    }
}
