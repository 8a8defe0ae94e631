//! Task comments for taskhub.
//!
//! Anyone with access to a task, its owner or a collaborator holding a
//! sharing grant, may read and add comments. Only the author may delete a
//! comment. Comments are removed together with their task. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
