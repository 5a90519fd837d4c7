//! Task and column entities.

use super::{ColumnId, TaskContent, TaskId};

/// A single unit of work on the board.
///
/// The owning column is recorded on the task itself as well as by column
/// membership. Only [`super::Board`] transitions write `column_id`, so the two
/// never diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    content: TaskContent,
    column_id: ColumnId,
}

impl Task {
    pub(super) const fn new(id: TaskId, content: TaskContent, column_id: ColumnId) -> Self {
        Self {
            id,
            content,
            column_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task content.
    #[must_use]
    pub const fn content(&self) -> &TaskContent {
        &self.content
    }

    /// Returns the identifier of the column holding this task.
    #[must_use]
    pub const fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    pub(super) fn reassign(&mut self, column_id: ColumnId) {
        self.column_id = column_id;
    }
}

/// Column definition used to build a board with no tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSeed {
    /// Column identifier.
    pub id: ColumnId,
    /// Display title.
    pub title: String,
}

impl ColumnSeed {
    /// Creates a column seed.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(id),
            title: title.into(),
        }
    }
}

/// A named, ordered list of tasks representing a workflow stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    id: ColumnId,
    title: String,
    tasks: Vec<Task>,
}

impl Column {
    pub(super) fn empty(seed: ColumnSeed) -> Self {
        Self {
            id: seed.id,
            title: seed.title,
            tasks: Vec::new(),
        }
    }

    pub(super) const fn with_tasks(id: ColumnId, title: String, tasks: Vec<Task>) -> Self {
        Self { id, title, tasks }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the position of a task within this column.
    #[must_use]
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }

    pub(super) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(super) fn take(&mut self, index: usize) -> Option<Task> {
        (index < self.tasks.len()).then(|| self.tasks.remove(index))
    }

    /// Inserts at `index`, clamped to the tail.
    pub(super) fn insert_clamped(&mut self, index: usize, task: Task) {
        let at = index.min(self.tasks.len());
        self.tasks.insert(at, task);
    }

    pub(super) fn retain_except(&mut self, task_id: &TaskId) {
        self.tasks.retain(|task| task.id() != task_id);
    }
}
