//! Repository port for task persistence and lookup.

use crate::{
    tag::domain::TagId,
    task::domain::{Task, TaskId},
    task_list::domain::TaskListId,
    user::domain::UserId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Persists changes to an existing task (details, status, tag,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Resolves the owning user of a task without loading the aggregate.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_owner(&self, id: TaskId) -> TaskRepositoryResult<Option<UserId>>;

    /// Returns the tasks with the given identifiers, skipping unknown IDs.
    async fn find_by_ids(&self, ids: &[TaskId]) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task in a list.
    async fn list_by_list(&self, list_id: TaskListId) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task referencing a tag.
    async fn find_by_tag(&self, tag_id: TagId) -> TaskRepositoryResult<Vec<Task>>;

    /// Deletes a task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
