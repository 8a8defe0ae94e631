//! Error types for title validation and disambiguation.

use thiserror::Error;

/// Errors returned while constructing a [`super::Title`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TitleError {
    /// The title is empty after trimming.
    #[error("title must not be empty")]
    Empty,

    /// The title exceeds the storage limit.
    #[error("title is {length} characters long, limit is {max}")]
    TooLong {
        /// Character count of the rejected title.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },
}

/// Errors returned while searching for a free title.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DisambiguationError<E> {
    /// Every candidate up to the configured cap was already taken.
    #[error("no free title derived from '{title}' after {attempts} attempts")]
    Exhausted {
        /// The title the caller asked for.
        title: String,
        /// Number of probes issued before giving up.
        attempts: u32,
    },

    /// The existence probe failed.
    #[error(transparent)]
    Probe(E),
}
