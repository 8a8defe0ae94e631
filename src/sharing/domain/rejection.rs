//! Reasons a grant request fails validation.

use thiserror::Error;

/// Validation failure of a grant request, in evaluation order.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum SharingRejection {
    /// The candidate user could not be resolved.
    #[error("cannot grant access to this task: user not found")]
    CandidateMissing,

    /// The task does not exist.
    #[error("cannot grant access to this task: task not found")]
    TaskMissing,

    /// The requester does not own the task.
    #[error("cannot grant access to this task: only the owner may share it")]
    NotOwner,

    /// The candidate is the task's owner.
    #[error("a task cannot be shared with its owner")]
    OwnerIsCandidate,
}
