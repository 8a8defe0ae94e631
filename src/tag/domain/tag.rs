//! Tag aggregate.

use super::TagId;
use crate::{naming::Title, user::domain::UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A user-owned label that can be attached to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    id: TagId,
    owner_id: UserId,
    name: Title,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTagData {
    /// Persisted tag identifier.
    pub id: TagId,
    /// Persisted owning user.
    pub owner_id: UserId,
    /// Persisted name.
    pub name: Title,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Tag {
    /// Creates a new tag owned by `owner_id`.
    #[must_use]
    pub fn new(owner_id: UserId, name: Title, clock: &impl Clock) -> Self {
        Self {
            id: TagId::new(),
            owner_id,
            name,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a tag from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTagData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            name: data.name,
            created_at: data.created_at,
        }
    }

    /// Returns the tag identifier.
    #[must_use]
    pub const fn id(&self) -> TagId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the tag name.
    #[must_use]
    pub const fn name(&self) -> &Title {
        &self.name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether `user_id` owns this tag.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}
