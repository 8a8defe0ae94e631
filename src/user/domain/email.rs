//! Normalized email address used to look users up.

use super::UserDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower-cased email address with one `@` separating non-empty parts.
///
/// # Examples
///
/// ```
/// use taskhub::user::domain::EmailAddress;
///
/// let email = EmailAddress::new(" Ada@Example.COM ").expect("valid email");
/// assert_eq!(email.as_str(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated, normalized email address.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::InvalidEmail`] when the value has no `@`,
    /// more than one `@`, an empty local or domain part, or whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, UserDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_lowercase();
        let mut parts = normalized.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && parts.next().is_none()
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(UserDomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the email address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
