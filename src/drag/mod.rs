//! Drag gesture interpretation.
//!
//! A [`DragSession`] turns the start/over/end/cancel events of a drag-input
//! provider into at most one [`BoardCommands::move_task`] call per gesture:
//!
//! - drop on the origin column reorders to the position of the card
//!   dropped on
//! - drop on another column appends to its tail
//! - release outside every column, or cancel, leaves the board alone

mod commands;
mod event;
mod session;

pub use commands::BoardCommands;
pub use event::DragEvent;
pub use session::{ActiveDrag, DragOutcome, DragSession};

#[cfg(test)]
mod tests;
