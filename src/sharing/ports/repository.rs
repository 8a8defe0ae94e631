//! Repository port for sharing grants.

use crate::{sharing::domain::TaskShare, task::domain::TaskId, user::domain::UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for sharing repository operations.
pub type TaskShareRepositoryResult<T> = Result<T, TaskShareRepositoryError>;

/// Sharing grant persistence contract.
///
/// Implementations must treat `(task_id, user_id)` as a unique key so that
/// concurrent grant requests that both passed validation cannot create two
/// records.
#[async_trait]
pub trait TaskShareRepository: Send + Sync {
    /// Returns whether a grant exists for the pair.
    async fn exists(&self, task_id: TaskId, user_id: UserId) -> TaskShareRepositoryResult<bool>;

    /// Stores a new grant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskShareRepositoryError::DuplicateShare`] when a grant for
    /// the pair already exists.
    async fn insert(&self, share: &TaskShare) -> TaskShareRepositoryResult<()>;

    /// Removes the grant for the pair, returning whether one existed.
    async fn delete(&self, task_id: TaskId, user_id: UserId) -> TaskShareRepositoryResult<bool>;

    /// Removes every grant on a task and returns how many were removed.
    async fn delete_all_for_task(&self, task_id: TaskId) -> TaskShareRepositoryResult<usize>;

    /// Removes every grant held by a user and returns how many were removed.
    async fn delete_all_for_user(&self, user_id: UserId) -> TaskShareRepositoryResult<usize>;

    /// Returns the grantees of a task.
    async fn list_users_for_task(&self, task_id: TaskId)
    -> TaskShareRepositoryResult<Vec<UserId>>;

    /// Returns the tasks shared with a user.
    async fn list_tasks_for_user(&self, user_id: UserId)
    -> TaskShareRepositoryResult<Vec<TaskId>>;
}

/// Errors returned by sharing repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskShareRepositoryError {
    /// A grant for the pair already exists.
    #[error("task already shared: {0}")]
    DuplicateShare(TaskShare),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskShareRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
