//! Validation and execution of sharing grants.

use super::TaskAccessAuthority;
use crate::{
    sharing::{
        domain::{SharingRejection, TaskShare},
        ports::{TaskShareRepository, TaskShareRepositoryError},
    },
    task::{
        domain::TaskId,
        ports::{TaskRepository, TaskRepositoryError},
    },
    user::domain::{User, UserId},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors returned by sharing policy operations.
#[derive(Debug, Error)]
pub enum SharingError {
    /// The grant request is malformed or not permitted.
    #[error(transparent)]
    Validation(#[from] SharingRejection),

    /// The pair already has a grant.
    #[error("already shared with this user")]
    AlreadyShared(TaskShare),

    /// Task lookup failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// Grant persistence failed.
    #[error(transparent)]
    Shares(TaskShareRepositoryError),
}

impl From<TaskShareRepositoryError> for SharingError {
    fn from(err: TaskShareRepositoryError) -> Self {
        match err {
            TaskShareRepositoryError::DuplicateShare(share) => Self::AlreadyShared(share),
            other @ TaskShareRepositoryError::Persistence(_) => Self::Shares(other),
        }
    }
}

/// Result type for sharing policy operations.
pub type SharingResult<T> = Result<T, SharingError>;

/// Governs how access to a task is extended and revoked.
#[derive(Clone)]
pub struct SharingPolicy<T, S>
where
    T: TaskRepository,
    S: TaskShareRepository,
{
    authority: TaskAccessAuthority<T, S>,
    shares: Arc<S>,
}

impl<T, S> SharingPolicy<T, S>
where
    T: TaskRepository,
    S: TaskShareRepository,
{
    /// Creates a new sharing policy.
    #[must_use]
    pub fn new(tasks: Arc<T>, shares: Arc<S>) -> Self {
        Self {
            authority: TaskAccessAuthority::new(tasks, Arc::clone(&shares)),
            shares,
        }
    }

    /// Returns the access authority used for ownership checks.
    #[must_use]
    pub const fn authority(&self) -> &TaskAccessAuthority<T, S> {
        &self.authority
    }

    /// Checks whether `requesting_owner_id` may share `task_id` with
    /// `candidate`.
    ///
    /// Checks run in a fixed order and stop at the first failure: the
    /// candidate must be resolved, the task must exist, the requester must
    /// own it, the candidate must not be the owner, and no grant may exist
    /// yet for the pair.
    ///
    /// # Errors
    ///
    /// Returns [`SharingError::Validation`] for the first four checks,
    /// [`SharingError::AlreadyShared`] for an existing grant, and repository
    /// errors from the lookups.
    pub async fn can_grant_access(
        &self,
        task_id: TaskId,
        requesting_owner_id: UserId,
        candidate: Option<&User>,
    ) -> SharingResult<()> {
        self.validated_grantee(task_id, requesting_owner_id, candidate)
            .await
            .map(|_| ())
    }

    /// Validates a grant request and stores the grant.
    ///
    /// A concurrent request that stored the same grant after validation
    /// passed surfaces as [`SharingError::AlreadyShared`].
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::can_grant_access`] and grant
    /// persistence errors.
    pub async fn grant_access(
        &self,
        task_id: TaskId,
        requesting_owner_id: UserId,
        candidate: Option<&User>,
    ) -> SharingResult<TaskShare> {
        let grantee_id = self
            .validated_grantee(task_id, requesting_owner_id, candidate)
            .await?;

        let share = TaskShare::new(task_id, grantee_id);
        self.shares.insert(&share).await?;
        info!(%task_id, user_id = %grantee_id, "task shared");
        Ok(share)
    }

    /// Removes the grant for the pair.
    ///
    /// Removing a grant that does not exist succeeds; the return value
    /// reports whether a grant was removed.
    ///
    /// # Errors
    ///
    /// Returns grant persistence errors.
    pub async fn revoke(&self, task_id: TaskId, user_id: UserId) -> SharingResult<bool> {
        let removed = self.shares.delete(task_id, user_id).await?;
        if removed {
            info!(%task_id, %user_id, "task access revoked");
        }
        Ok(removed)
    }

    /// Removes every grant on a task, for use when the task is deleted.
    ///
    /// # Errors
    ///
    /// Returns grant persistence errors.
    pub async fn revoke_all_for_task(&self, task_id: TaskId) -> SharingResult<usize> {
        let removed = self.shares.delete_all_for_task(task_id).await?;
        if removed > 0 {
            info!(%task_id, removed, "revoked all grants on task");
        }
        Ok(removed)
    }

    /// Removes every grant held by a user, for use when the user is deleted.
    ///
    /// # Errors
    ///
    /// Returns grant persistence errors.
    pub async fn revoke_all_for_user(&self, user_id: UserId) -> SharingResult<usize> {
        let removed = self.shares.delete_all_for_user(user_id).await?;
        if removed > 0 {
            info!(%user_id, removed, "revoked all grants held by user");
        }
        Ok(removed)
    }

    async fn validated_grantee(
        &self,
        task_id: TaskId,
        requesting_owner_id: UserId,
        candidate: Option<&User>,
    ) -> SharingResult<UserId> {
        let result = self
            .check_grant(task_id, requesting_owner_id, candidate)
            .await;
        if let Err(ref err) = result {
            debug!(%task_id, requester = %requesting_owner_id, error = %err, "grant request refused");
        }
        result
    }

    async fn check_grant(
        &self,
        task_id: TaskId,
        requesting_owner_id: UserId,
        candidate: Option<&User>,
    ) -> SharingResult<UserId> {
        let grantee = candidate.ok_or(SharingRejection::CandidateMissing)?;
        let owner_id = self
            .authority
            .lookup_owner(task_id)
            .await?
            .ok_or(SharingRejection::TaskMissing)?;
        if requesting_owner_id != owner_id {
            return Err(SharingRejection::NotOwner.into());
        }
        if grantee.id() == owner_id {
            return Err(SharingRejection::OwnerIsCandidate.into());
        }
        if self.shares.exists(task_id, grantee.id()).await? {
            return Err(SharingError::AlreadyShared(TaskShare::new(
                task_id,
                grantee.id(),
            )));
        }
        Ok(grantee.id())
    }
}
