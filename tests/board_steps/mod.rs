//! Step definitions for board command and drag gesture scenarios.

mod given;
mod then;
mod when;
