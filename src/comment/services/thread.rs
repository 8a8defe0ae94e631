//! Service layer for reading and writing the comments on a task.

use crate::{
    comment::{
        domain::{Comment, CommentDomainError, CommentId, CommentText},
        ports::{CommentRepository, CommentRepositoryError},
    },
    sharing::{
        ports::TaskShareRepository,
        services::{AccessError, TaskAccessAuthority},
    },
    task::{domain::TaskId, ports::TaskRepository},
    user::domain::UserId,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for comment operations.
#[derive(Debug, Error)]
pub enum CommentServiceError {
    /// Comment text validation failed.
    #[error(transparent)]
    Domain(#[from] CommentDomainError),
    /// The requester may not act on the task.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] CommentRepositoryError),
    /// No comment exists with the given identifier.
    #[error("comment {0} not found")]
    NotFound(CommentId),
    /// Only the author may delete a comment.
    #[error("user {user_id} is not the author of comment {comment_id}")]
    NotAuthor {
        /// Comment the user tried to delete.
        comment_id: CommentId,
        /// User that was refused.
        user_id: UserId,
    },
}

/// Result type for comment service operations.
pub type CommentServiceResult<T> = Result<T, CommentServiceError>;

/// Comment orchestration service.
#[derive(Clone)]
pub struct CommentService<M, T, S, C>
where
    M: CommentRepository,
    T: TaskRepository,
    S: TaskShareRepository,
    C: Clock + Send + Sync,
{
    comments: Arc<M>,
    authority: TaskAccessAuthority<T, S>,
    clock: Arc<C>,
}

impl<M, T, S, C> CommentService<M, T, S, C>
where
    M: CommentRepository,
    T: TaskRepository,
    S: TaskShareRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new comment service.
    #[must_use]
    pub fn new(comments: Arc<M>, tasks: Arc<T>, shares: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            comments,
            authority: TaskAccessAuthority::new(tasks, shares),
            clock,
        }
    }

    /// Adds a comment to a task the author may access.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Access`] when the task is missing or
    /// the author has no access, [`CommentServiceError::Domain`] for empty
    /// or oversized text, and repository errors.
    pub async fn add_comment(
        &self,
        task_id: TaskId,
        author_id: UserId,
        text: &str,
    ) -> CommentServiceResult<Comment> {
        self.authority.ensure_access(task_id, author_id).await?;
        let comment = Comment::new(task_id, author_id, CommentText::new(text)?, &*self.clock);
        self.comments.store(&comment).await?;
        info!(comment_id = %comment.id(), %task_id, %author_id, "comment added");
        Ok(comment)
    }

    /// Returns a task's comments, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::Access`] when the requester has no
    /// access, and repository errors.
    pub async fn list_comments(
        &self,
        task_id: TaskId,
        requester_id: UserId,
    ) -> CommentServiceResult<Vec<Comment>> {
        self.authority.ensure_access(task_id, requester_id).await?;
        Ok(self.comments.list_by_task(task_id).await?)
    }

    /// Deletes a comment written by the requester.
    ///
    /// # Errors
    ///
    /// Returns [`CommentServiceError::NotFound`] for unknown comments,
    /// [`CommentServiceError::NotAuthor`] when someone else wrote it, and
    /// repository errors.
    pub async fn delete_comment(
        &self,
        comment_id: CommentId,
        requester_id: UserId,
    ) -> CommentServiceResult<()> {
        let comment = self
            .comments
            .find_by_id(comment_id)
            .await?
            .ok_or(CommentServiceError::NotFound(comment_id))?;
        if comment.author_id() != requester_id {
            return Err(CommentServiceError::NotAuthor {
                comment_id,
                user_id: requester_id,
            });
        }
        self.comments.delete(comment_id).await?;
        info!(%comment_id, "comment deleted");
        Ok(())
    }
}
