//! Authorization predicate for task-scoped operations.

use crate::{
    sharing::ports::{TaskShareRepository, TaskShareRepositoryError},
    task::{
        domain::TaskId,
        ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    },
    user::domain::UserId,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors returned by access checks.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The user neither owns the task nor holds a grant for it.
    #[error("user {user_id} may not access task {task_id}")]
    AccessDenied {
        /// Task the user tried to act on.
        task_id: TaskId,
        /// User that was refused.
        user_id: UserId,
    },

    /// The operation requires ownership and the user is not the owner.
    #[error("user {user_id} does not own task {task_id}")]
    NotOwner {
        /// Task the user tried to act on.
        task_id: TaskId,
        /// User that was refused.
        user_id: UserId,
    },

    /// Task lookup failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// Grant lookup failed.
    #[error(transparent)]
    Shares(#[from] TaskShareRepositoryError),
}

/// Result type for access checks.
pub type AccessResult<T> = Result<T, AccessError>;

/// Decides whether a user may act on a task.
///
/// A user has access when they own the task or hold a grant for it. The
/// ownership check runs first and skips the grant lookup when it succeeds.
/// All checks are read-only.
#[derive(Clone)]
pub struct TaskAccessAuthority<T, S>
where
    T: TaskRepository,
    S: TaskShareRepository,
{
    tasks: Arc<T>,
    shares: Arc<S>,
}

impl<T, S> TaskAccessAuthority<T, S>
where
    T: TaskRepository,
    S: TaskShareRepository,
{
    /// Creates a new access authority.
    #[must_use]
    pub const fn new(tasks: Arc<T>, shares: Arc<S>) -> Self {
        Self { tasks, shares }
    }

    /// Looks up the owner of a task.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns the repository error when the lookup fails.
    pub async fn lookup_owner(&self, task_id: TaskId) -> TaskRepositoryResult<Option<UserId>> {
        self.tasks.find_owner(task_id).await
    }

    /// Returns whether `user_id` may act on `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::TaskNotFound`] when the task does not exist, or
    /// repository errors from either lookup.
    pub async fn has_access(&self, task_id: TaskId, user_id: UserId) -> AccessResult<bool> {
        let owner_id = self.owner_or_not_found(task_id).await?;
        if owner_id == user_id {
            return Ok(true);
        }
        Ok(self.shares.exists(task_id, user_id).await?)
    }

    /// Requires that `user_id` may act on `task_id` and returns the owner.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AccessDenied`] when the user has no access, in
    /// addition to the errors of [`Self::has_access`].
    pub async fn ensure_access(&self, task_id: TaskId, user_id: UserId) -> AccessResult<UserId> {
        let owner_id = self.owner_or_not_found(task_id).await?;
        if owner_id == user_id || self.shares.exists(task_id, user_id).await? {
            return Ok(owner_id);
        }
        debug!(%task_id, %user_id, "task access denied");
        Err(AccessError::AccessDenied { task_id, user_id })
    }

    /// Requires that `user_id` owns `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::TaskNotFound`] when the task does not exist and
    /// [`AccessError::NotOwner`] when someone else owns it.
    pub async fn ensure_owner(&self, task_id: TaskId, user_id: UserId) -> AccessResult<()> {
        let owner_id = self.owner_or_not_found(task_id).await?;
        if owner_id != user_id {
            debug!(%task_id, %user_id, "owner-only task operation refused");
            return Err(AccessError::NotOwner { task_id, user_id });
        }
        Ok(())
    }

    async fn owner_or_not_found(&self, task_id: TaskId) -> AccessResult<UserId> {
        self.lookup_owner(task_id)
            .await?
            .ok_or(AccessError::TaskNotFound(task_id))
    }
}
