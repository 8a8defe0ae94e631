//! Task lists for taskhub.
//!
//! A task list belongs to exactly one user and groups that user's tasks.
//! List titles are unique per owner, case-insensitively; creating or
//! renaming a list onto a taken title resolves to a suffixed variant such as
//! `"Work (1)"` instead of failing. Deleting a list removes its tasks along
//! with their sharing grants and comments. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
