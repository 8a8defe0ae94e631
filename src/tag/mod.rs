//! Tags for taskhub.
//!
//! Tags are owned by a user and can be attached to that user's tasks, one
//! tag per task. Tag names are unique per owner and collide the same way
//! list titles do. Deleting a tag detaches it from every task first. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
