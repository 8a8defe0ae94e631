//! Repository port for comment persistence.

use crate::{
    comment::domain::{Comment, CommentId},
    task::domain::TaskId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for comment repository operations.
pub type CommentRepositoryResult<T> = Result<T, CommentRepositoryError>;

/// Comment persistence contract.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Stores a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::DuplicateComment`] when the ID
    /// already exists.
    async fn store(&self, comment: &Comment) -> CommentRepositoryResult<()>;

    /// Finds a comment by identifier.
    ///
    /// Returns `None` when the comment does not exist.
    async fn find_by_id(&self, id: CommentId) -> CommentRepositoryResult<Option<Comment>>;

    /// Returns every comment on a task, oldest first.
    async fn list_by_task(&self, task_id: TaskId) -> CommentRepositoryResult<Vec<Comment>>;

    /// Deletes a comment.
    ///
    /// # Errors
    ///
    /// Returns [`CommentRepositoryError::NotFound`] when the comment does not
    /// exist.
    async fn delete(&self, id: CommentId) -> CommentRepositoryResult<()>;

    /// Deletes every comment on a task and returns how many were removed.
    async fn delete_all_for_task(&self, task_id: TaskId) -> CommentRepositoryResult<usize>;
}

/// Errors returned by comment repository implementations.
#[derive(Debug, Clone, Error)]
pub enum CommentRepositoryError {
    /// A comment with the same identifier already exists.
    #[error("duplicate comment identifier: {0}")]
    DuplicateComment(CommentId),

    /// The comment was not found.
    #[error("comment not found: {0}")]
    NotFound(CommentId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl CommentRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
