//! Sharing grant binding one user to one task.

use crate::{task::domain::TaskId, user::domain::UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grant giving a non-owner access to a single task.
///
/// The pair is the whole identity; a grant carries no further payload. The
/// grantee never equals the task's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskShare {
    task_id: TaskId,
    user_id: UserId,
}

impl TaskShare {
    /// Creates a grant record for `user_id` on `task_id`.
    ///
    /// Validation happens in [`crate::sharing::services::SharingPolicy`];
    /// this constructor only pairs the identifiers.
    #[must_use]
    pub const fn new(task_id: TaskId, user_id: UserId) -> Self {
        Self { task_id, user_id }
    }

    /// Returns the shared task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the grantee.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }
}

impl fmt::Display for TaskShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.task_id, self.user_id)
    }
}
