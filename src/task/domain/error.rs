//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use crate::naming::TitleError;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The requested status is not a known task status.
    #[error("unknown task status: {0}")]
    InvalidStatus(String),

    /// A completed task was asked to move to another status.
    #[error("cannot leave a completed task: task {task_id} cannot move to {to}")]
    CompletedTaskLocked {
        /// Task that rejected the change.
        task_id: TaskId,
        /// Requested target status.
        to: TaskStatus,
    },

    /// The task title failed validation.
    #[error("invalid task title: {0}")]
    InvalidTitle(#[from] TitleError),
}

/// Error returned while parsing task statuses from requests or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

impl From<ParseTaskStatusError> for TaskDomainError {
    fn from(err: ParseTaskStatusError) -> Self {
        Self::InvalidStatus(err.0)
    }
}
