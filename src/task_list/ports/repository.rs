//! Repository port for task list persistence and title lookup.

use crate::{
    naming::Title,
    task_list::domain::{TaskList, TaskListId},
    user::domain::UserId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task list repository operations.
pub type TaskListRepositoryResult<T> = Result<T, TaskListRepositoryError>;

/// Task list persistence contract.
#[async_trait]
pub trait TaskListRepository: Send + Sync {
    /// Stores a new task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::DuplicateTaskList`] when the ID
    /// already exists or [`TaskListRepositoryError::DuplicateTitle`] when the
    /// owner already has a list with the same title, ignoring case.
    async fn store(&self, list: &TaskList) -> TaskListRepositoryResult<()>;

    /// Persists changes to an existing task list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the list does not
    /// exist or [`TaskListRepositoryError::DuplicateTitle`] when the new
    /// title collides with another of the owner's lists.
    async fn update(&self, list: &TaskList) -> TaskListRepositoryResult<()>;

    /// Finds a task list by identifier.
    ///
    /// Returns `None` when the list does not exist.
    async fn find_by_id(&self, id: TaskListId) -> TaskListRepositoryResult<Option<TaskList>>;

    /// Returns every list owned by `owner_id`, oldest first.
    async fn list_by_owner(&self, owner_id: UserId) -> TaskListRepositoryResult<Vec<TaskList>>;

    /// Returns whether `owner_id` already has a list titled `title`,
    /// compared case-insensitively.
    async fn exists_title_for_owner(
        &self,
        owner_id: UserId,
        title: &str,
    ) -> TaskListRepositoryResult<bool>;

    /// Deletes a task list record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListRepositoryError::NotFound`] when the list does not
    /// exist.
    async fn delete(&self, id: TaskListId) -> TaskListRepositoryResult<()>;
}

/// Errors returned by task list repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskListRepositoryError {
    /// A list with the same identifier already exists.
    #[error("duplicate task list identifier: {0}")]
    DuplicateTaskList(TaskListId),

    /// The owner already has a list with this title.
    #[error("task list title already in use: {0}")]
    DuplicateTitle(Title),

    /// The list was not found.
    #[error("task list not found: {0}")]
    NotFound(TaskListId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskListRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
