//! Adapter implementations for board persistence ports.

pub mod file;
pub mod memory;
