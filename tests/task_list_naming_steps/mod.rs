//! Step definitions for task list naming scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
