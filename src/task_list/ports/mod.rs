//! Port contracts for task lists.

pub mod repository;

pub use repository::{TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult};
