//! Error types for user domain validation.

use thiserror::Error;

/// Errors returned while constructing user domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The email address is not of the form `local@domain`.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The display name is empty after trimming.
    #[error("display name must not be empty")]
    EmptyDisplayName,
}
