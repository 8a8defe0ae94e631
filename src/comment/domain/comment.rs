//! Comment entity and its validated text.

use super::{CommentDomainError, CommentId};
use crate::{task::domain::TaskId, user::domain::UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty comment body with a bounded length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentText(String);

impl CommentText {
    /// Maximum comment length in characters.
    pub const MAX_LENGTH: usize = 2000;

    /// Creates validated comment text.
    ///
    /// # Errors
    ///
    /// Returns [`CommentDomainError::EmptyText`] for blank input and
    /// [`CommentDomainError::TextTooLong`] past [`Self::MAX_LENGTH`]
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, CommentDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CommentDomainError::EmptyText);
        }
        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(CommentDomainError::TextTooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A comment left on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    task_id: TaskId,
    author_id: UserId,
    text: CommentText,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedCommentData {
    /// Persisted comment identifier.
    pub id: CommentId,
    /// Persisted parent task.
    pub task_id: TaskId,
    /// Persisted author.
    pub author_id: UserId,
    /// Persisted text.
    pub text: CommentText,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a new comment on `task_id` by `author_id`.
    #[must_use]
    pub fn new(task_id: TaskId, author_id: UserId, text: CommentText, clock: &impl Clock) -> Self {
        Self {
            id: CommentId::new(),
            task_id,
            author_id,
            text,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a comment from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedCommentData) -> Self {
        Self {
            id: data.id,
            task_id: data.task_id,
            author_id: data.author_id,
            text: data.text,
            created_at: data.created_at,
        }
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the parent task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the author.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Returns the comment text.
    #[must_use]
    pub const fn text(&self) -> &CommentText {
        &self.text
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
