//! Taskboard: a single-user kanban board engine.
//!
//! The crate holds the board state model and the drag-driven mutation
//! protocol behind a kanban UI. Rendering, pointer capture and the storage
//! medium are collaborators supplied by the host.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board values and transitions with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete key-value stores (in-memory, directory-backed)
//!
//! # Modules
//!
//! - [`board`]: Board model, the board store and persistence
//! - [`drag`]: Drag gesture interpretation into board moves

pub mod board;
pub mod drag;
