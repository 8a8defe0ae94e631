//! Step definitions for task sharing scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
