//! Error types for comment domain validation.

use thiserror::Error;

/// Errors returned while constructing comment domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentDomainError {
    /// The comment text is empty after trimming.
    #[error("comment text must not be empty")]
    EmptyText,

    /// The comment text exceeds the storage limit.
    #[error("comment is {length} characters long, limit is {max}")]
    TextTooLong {
        /// Character count of the rejected text.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },
}
