//! Service layer for user registration, lookup and removal.

use crate::{
    sharing::{
        ports::TaskShareRepository,
        services::{SharingError, SharingPolicy},
    },
    task::ports::TaskRepository,
    user::{
        domain::{EmailAddress, User, UserDomainError, UserId},
        ports::{UserRepository, UserRepositoryError},
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    email: String,
    display_name: String,
}

impl RegisterUserRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
        }
    }
}

/// Service-level errors for user directory operations.
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
    /// Grant cleanup failed.
    #[error(transparent)]
    Sharing(#[from] SharingError),
    /// No user exists with the given identifier.
    #[error("user {0} not found")]
    NotFound(UserId),
}

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// User registration and lookup service.
#[derive(Clone)]
pub struct UserDirectory<U, T, S, C>
where
    U: UserRepository,
    T: TaskRepository,
    S: TaskShareRepository,
    C: Clock + Send + Sync,
{
    users: Arc<U>,
    sharing: SharingPolicy<T, S>,
    clock: Arc<C>,
}

impl<U, T, S, C> UserDirectory<U, T, S, C>
where
    U: UserRepository,
    T: TaskRepository,
    S: TaskShareRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new user directory.
    #[must_use]
    pub const fn new(users: Arc<U>, sharing: SharingPolicy<T, S>, clock: Arc<C>) -> Self {
        Self {
            users,
            sharing,
            clock,
        }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Domain`] when the email or display name
    /// is invalid, or [`UserDirectoryError::Repository`] when the email is
    /// already registered.
    pub async fn register(&self, request: RegisterUserRequest) -> UserDirectoryResult<User> {
        let email = EmailAddress::new(request.email)?;
        let user = User::new(email, request.display_name, &*self.clock)?;
        self.users.store(&user).await?;
        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }

    /// Finds a user by identifier.
    ///
    /// Returns `Ok(None)` when no user has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        Ok(self.users.find_by_id(id).await?)
    }

    /// Finds a user by email address.
    ///
    /// Returns `Ok(None)` when no user has the address.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::Domain`] for a malformed address or
    /// [`UserDirectoryError::Repository`] when lookup fails.
    pub async fn find_by_email(&self, email: &str) -> UserDirectoryResult<Option<User>> {
        let address = EmailAddress::new(email)?;
        Ok(self.users.find_by_email(&address).await?)
    }

    /// Deletes a user after revoking every grant they hold.
    ///
    /// Grants go first so an interrupted removal never leaves grants that
    /// point at a missing user.
    ///
    /// # Errors
    ///
    /// Returns [`UserDirectoryError::NotFound`] when the user does not exist,
    /// and grant or repository errors.
    pub async fn delete(&self, id: UserId) -> UserDirectoryResult<()> {
        if self.users.find_by_id(id).await?.is_none() {
            return Err(UserDirectoryError::NotFound(id));
        }
        let revoked = self.sharing.revoke_all_for_user(id).await?;
        self.users.delete(id).await?;
        info!(user_id = %id, revoked, "user deleted");
        Ok(())
    }
}
