//! Two-state drag session.

use super::{BoardCommands, DragEvent};
use crate::board::domain::{Board, Column, ColumnId, TaskId};
use std::sync::Arc;

/// The gesture currently in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDrag {
    /// The dragged task.
    pub task_id: TaskId,
    /// The column the task was picked up from.
    pub origin: ColumnId,
}

/// What a single event did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// A gesture began.
    Started,
    /// The event had no effect.
    Ignored,
    /// The gesture ended without touching the board.
    Cancelled,
    /// The gesture ended with one `move_task` call; carries its result.
    Committed(Arc<Board>),
}

/// Tracks one drag gesture from pickup to drop or cancellation.
///
/// Only the start and end events matter: intermediate hover events are
/// accepted and dropped. A gesture issues at most one board command, and
/// only from the active state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSession {
    active: Option<ActiveDrag>,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Returns the gesture in flight, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    /// Returns the dragged task for preview rendering.
    #[must_use]
    pub fn active_task(&self) -> Option<&TaskId> {
        self.active.as_ref().map(|drag| &drag.task_id)
    }

    /// Returns `true` while a gesture is in flight.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Feeds one provider event through the state machine.
    pub fn handle(&mut self, event: DragEvent, commands: &mut impl BoardCommands) -> DragOutcome {
        match event {
            DragEvent::Start { item } => self.start(item, &commands.board()),
            DragEvent::Over { .. } => DragOutcome::Ignored,
            DragEvent::End {
                item,
                container,
                sibling,
            } => self.end(&item, container, sibling.as_ref(), commands),
            DragEvent::Cancel => self.cancel(),
        }
    }

    fn start(&mut self, item: TaskId, board: &Board) -> DragOutcome {
        let Some(position) = board.locate_task(&item) else {
            tracing::debug!(task = %item, "drag start for unknown task ignored");
            return DragOutcome::Ignored;
        };
        if let Some(previous) = &self.active {
            tracing::debug!(task = %previous.task_id, "drag superseded by new gesture");
        }
        tracing::debug!(task = %item, origin = %position.column_id, "drag started");
        self.active = Some(ActiveDrag {
            task_id: item,
            origin: position.column_id,
        });
        DragOutcome::Started
    }

    fn end(
        &mut self,
        item: &TaskId,
        container: Option<ColumnId>,
        sibling: Option<&TaskId>,
        commands: &mut impl BoardCommands,
    ) -> DragOutcome {
        let Some(active) = self.active.take() else {
            return DragOutcome::Ignored;
        };
        if active.task_id != *item {
            tracing::debug!(expected = %active.task_id, got = %item, "stale drag end discarded");
            return DragOutcome::Cancelled;
        }
        let Some(target) = container else {
            tracing::debug!(task = %item, "dropped outside any column");
            return DragOutcome::Cancelled;
        };

        let board = commands.board();
        let Some(column) = board.column(&target) else {
            tracing::debug!(task = %item, column = %target, "dropped on unknown column");
            return DragOutcome::Cancelled;
        };
        let dest_index = if target == active.origin {
            reorder_index(column, sibling)
        } else {
            column.len()
        };
        tracing::debug!(task = %item, column = %target, index = dest_index, "drag committed");
        DragOutcome::Committed(commands.move_task(&active.task_id, &target, dest_index))
    }

    fn cancel(&mut self) -> DragOutcome {
        match self.active.take() {
            Some(active) => {
                tracing::debug!(task = %active.task_id, "drag cancelled");
                DragOutcome::Cancelled
            }
            None => DragOutcome::Ignored,
        }
    }
}

/// Index of the drop sibling within the origin column, or the tail when the
/// drop landed on the column itself.
fn reorder_index(origin: &Column, sibling: Option<&TaskId>) -> usize {
    sibling
        .and_then(|sibling_id| origin.position_of(sibling_id))
        .unwrap_or_else(|| origin.len())
}
