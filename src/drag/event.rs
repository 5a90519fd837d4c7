//! High-level events emitted by the drag-input provider.

use crate::board::domain::{ColumnId, TaskId};

/// A drag gesture event.
///
/// Pointer capture and hit-testing happen upstream; by the time an event
/// arrives here the provider has already resolved which column (and, for
/// reorders, which sibling card) the pointer is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// A card was picked up.
    Start {
        /// The dragged task.
        item: TaskId,
    },
    /// The dragged card is hovering over a container.
    Over {
        /// The dragged task.
        item: TaskId,
        /// The column under the pointer, if any.
        container: Option<ColumnId>,
    },
    /// The card was released.
    End {
        /// The dragged task.
        item: TaskId,
        /// The column it was dropped on, or `None` outside any drop target.
        container: Option<ColumnId>,
        /// The card it was dropped on, if any.
        sibling: Option<TaskId>,
    },
    /// The provider aborted the gesture, e.g. on escape.
    Cancel,
}

impl DragEvent {
    /// Builds a [`DragEvent::Start`].
    #[must_use]
    pub fn start(item: impl Into<TaskId>) -> Self {
        Self::Start { item: item.into() }
    }

    /// Builds a [`DragEvent::Over`] for a hovered column.
    #[must_use]
    pub fn over(item: impl Into<TaskId>, container: impl Into<ColumnId>) -> Self {
        Self::Over {
            item: item.into(),
            container: Some(container.into()),
        }
    }

    /// Builds a [`DragEvent::End`] dropped on a column, optionally onto a
    /// sibling card.
    #[must_use]
    pub fn drop_on(
        item: impl Into<TaskId>,
        container: impl Into<ColumnId>,
        sibling: Option<TaskId>,
    ) -> Self {
        Self::End {
            item: item.into(),
            container: Some(container.into()),
            sibling,
        }
    }

    /// Builds a [`DragEvent::End`] released outside every drop target.
    #[must_use]
    pub fn drop_outside(item: impl Into<TaskId>) -> Self {
        Self::End {
            item: item.into(),
            container: None,
            sibling: None,
        }
    }
}
