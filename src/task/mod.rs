//! Tasks and their status lifecycle for taskhub.
//!
//! A task lives in exactly one task list and inherits that list's owner,
//! which never changes afterwards. Status moves forward through
//! `not_started`, `in_progress` and `done`; once done a task cannot be
//! reopened. Reads and writes by anyone other than the owner are gated by
//! [`crate::sharing`]. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
