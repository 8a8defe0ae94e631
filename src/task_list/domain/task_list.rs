//! Task list aggregate root.

use super::TaskListId;
use crate::{naming::Title, user::domain::UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A user-owned, titled collection of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    id: TaskListId,
    owner_id: UserId,
    title: Title,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskListData {
    /// Persisted list identifier.
    pub id: TaskListId,
    /// Persisted owning user.
    pub owner_id: UserId,
    /// Persisted title.
    pub title: Title,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskList {
    /// Creates a new task list owned by `owner_id`.
    ///
    /// The title is stored as given; callers resolve collisions first.
    #[must_use]
    pub fn new(owner_id: UserId, title: Title, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskListId::new(),
            owner_id,
            title,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task list from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskListData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> TaskListId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the list title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether `user_id` owns this list.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    /// Replaces the title.
    ///
    /// Renaming to an identical title is a no-op and leaves `updated_at`
    /// untouched.
    pub fn rename(&mut self, title: Title, clock: &impl Clock) {
        if self.title == title {
            return;
        }
        self.title = title;
        self.updated_at = clock.utc();
    }
}
