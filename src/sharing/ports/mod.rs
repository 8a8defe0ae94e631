//! Port contracts for task sharing.

pub mod repository;

pub use repository::{TaskShareRepository, TaskShareRepositoryError, TaskShareRepositoryResult};
