//! Entry points for sharing tasks with other users.

use super::{AccessError, SharingError, SharingPolicy, TaskAccessAuthority};
use crate::{
    sharing::{
        domain::TaskShare,
        ports::{TaskShareRepository, TaskShareRepositoryError},
    },
    task::{domain::TaskId, ports::TaskRepository},
    user::{
        domain::{EmailAddress, User, UserDomainError, UserId},
        ports::{UserRepository, UserRepositoryError},
    },
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for sharing operations.
#[derive(Debug, Error)]
pub enum SharingServiceError {
    /// The email address is malformed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// The grant request was refused.
    #[error(transparent)]
    Sharing(#[from] SharingError),
    /// The requester may not perform the operation.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// User lookup failed.
    #[error(transparent)]
    Users(#[from] UserRepositoryError),
    /// Grant lookup failed.
    #[error(transparent)]
    Shares(#[from] TaskShareRepositoryError),
}

/// Result type for sharing service operations.
pub type SharingServiceResult<T> = Result<T, SharingServiceError>;

/// Sharing orchestration service.
#[derive(Clone)]
pub struct SharingService<T, S, U>
where
    T: TaskRepository,
    S: TaskShareRepository,
    U: UserRepository,
{
    policy: SharingPolicy<T, S>,
    shares: Arc<S>,
    users: Arc<U>,
}

impl<T, S, U> SharingService<T, S, U>
where
    T: TaskRepository,
    S: TaskShareRepository,
    U: UserRepository,
{
    /// Creates a new sharing service.
    #[must_use]
    pub fn new(tasks: Arc<T>, shares: Arc<S>, users: Arc<U>) -> Self {
        Self {
            policy: SharingPolicy::new(tasks, Arc::clone(&shares)),
            shares,
            users,
        }
    }

    /// Returns the underlying sharing policy.
    #[must_use]
    pub const fn policy(&self) -> &SharingPolicy<T, S> {
        &self.policy
    }

    fn authority(&self) -> &TaskAccessAuthority<T, S> {
        self.policy.authority()
    }

    /// Shares a task with the user registered under `email`.
    ///
    /// An unknown address is treated like any other unresolved candidate.
    ///
    /// # Errors
    ///
    /// Returns [`SharingServiceError::Domain`] for a malformed address,
    /// [`SharingServiceError::Sharing`] when the policy refuses the grant,
    /// and repository errors.
    pub async fn share_with_email(
        &self,
        task_id: TaskId,
        owner_id: UserId,
        email: &str,
    ) -> SharingServiceResult<TaskShare> {
        let address = EmailAddress::new(email)?;
        let candidate = self.users.find_by_email(&address).await?;
        Ok(self
            .policy
            .grant_access(task_id, owner_id, candidate.as_ref())
            .await?)
    }

    /// Shares a task with the user identified by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SharingServiceError::Sharing`] when the policy refuses the
    /// grant, and repository errors.
    pub async fn share_with_user(
        &self,
        task_id: TaskId,
        owner_id: UserId,
        user_id: UserId,
    ) -> SharingServiceResult<TaskShare> {
        let candidate = self.users.find_by_id(user_id).await?;
        Ok(self
            .policy
            .grant_access(task_id, owner_id, candidate.as_ref())
            .await?)
    }

    /// Removes `user_id`'s grant on a task.
    ///
    /// The owner may remove any grant; a collaborator may remove only their
    /// own. Removing a grant that does not exist succeeds and returns
    /// `false`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::TaskNotFound`] when the task does not exist,
    /// [`AccessError::AccessDenied`] when the requester is neither the owner
    /// nor the grantee, and repository errors.
    pub async fn unshare(
        &self,
        task_id: TaskId,
        requester_id: UserId,
        user_id: UserId,
    ) -> SharingServiceResult<bool> {
        let owner_id = self
            .authority()
            .lookup_owner(task_id)
            .await
            .map_err(AccessError::from)?
            .ok_or(AccessError::TaskNotFound(task_id))?;
        if requester_id != owner_id && requester_id != user_id {
            return Err(AccessError::AccessDenied {
                task_id,
                user_id: requester_id,
            }
            .into());
        }
        Ok(self.policy.revoke(task_id, user_id).await?)
    }

    /// Returns the users a task is shared with.
    ///
    /// Grants whose user record no longer exists are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SharingServiceError::Access`] when the requester may not
    /// see the task, and repository errors.
    pub async fn collaborators(
        &self,
        task_id: TaskId,
        requester_id: UserId,
    ) -> SharingServiceResult<Vec<User>> {
        self.authority().ensure_access(task_id, requester_id).await?;
        let user_ids = self.shares.list_users_for_task(task_id).await?;

        let mut users = Vec::with_capacity(user_ids.len());
        for user_id in user_ids {
            if let Some(user) = self.users.find_by_id(user_id).await? {
                users.push(user);
            }
        }
        Ok(users)
    }
}
