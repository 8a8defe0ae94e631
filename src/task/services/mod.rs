//! Application services for task orchestration.

mod cascade;
mod lifecycle;

pub use cascade::{TaskCascade, TaskCascadeError, TaskCascadeResult};
pub use lifecycle::{
    CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult, UpdateTaskRequest,
};
