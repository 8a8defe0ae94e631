//! User aggregate root.

use super::{EmailAddress, UserDomainError, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Registered user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    email: EmailAddress,
    display_name: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted display name.
    pub display_name: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user account.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyDisplayName`] when the display name is
    /// blank.
    pub fn new(
        email: EmailAddress,
        display_name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, UserDomainError> {
        let raw_name = display_name.into();
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return Err(UserDomainError::EmptyDisplayName);
        }

        Ok(Self {
            id: UserId::new(),
            email,
            display_name: trimmed.to_owned(),
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            email: data.email,
            display_name: data.display_name,
            created_at: data.created_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
