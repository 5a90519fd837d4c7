//! Task board state and persistence.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types and pure transitions in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The board store and snapshot codec in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
