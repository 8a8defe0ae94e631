//! Application services for task lists.

mod lists;

pub use lists::{TaskListService, TaskListServiceError, TaskListServiceResult};
