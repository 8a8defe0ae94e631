//! User accounts for taskhub.
//!
//! Users own task lists, tags and comments, and may hold sharing grants on
//! tasks owned by someone else. Resolving a user by email is the entry
//! point for sharing a task. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
