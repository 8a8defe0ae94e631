//! Task status and its forward-only transition rule.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    NotStarted,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Done,
}

impl TaskStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns whether no other status can follow this one.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns whether a status change from `self` to `target` succeeds.
    ///
    /// Staying on the same status always succeeds as a no-op. `Done` may not
    /// be left; every other move is allowed, including skipping
    /// `InProgress`.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self == target || !self.is_terminal()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Outcome of a successful status change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// The task already had the requested status; nothing was modified.
    Unchanged,
    /// The status moved between two different values.
    Changed {
        /// Status before the change.
        from: TaskStatus,
        /// Status after the change.
        to: TaskStatus,
    },
}

impl StatusChange {
    /// Returns whether the task was modified.
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}
