//! Validated display title shared by task lists and tags.

use super::TitleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty, trimmed title with a bounded length.
///
/// Uniqueness among one owner's lists or tags is case-insensitive; use
/// [`Title::uniqueness_key`] when indexing.
///
/// # Examples
///
/// ```
/// use taskhub::naming::Title;
///
/// let title = Title::new("  Groceries ").expect("valid title");
/// assert_eq!(title.as_str(), "Groceries");
/// assert_eq!(title.uniqueness_key(), "groceries");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Maximum title length in characters.
    pub const MAX_LENGTH: usize = 200;

    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TitleError::Empty`] when the value is blank and
    /// [`TitleError::TooLong`] when it exceeds [`Self::MAX_LENGTH`]
    /// characters after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TitleError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TitleError::Empty);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TitleError::TooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the case-folded form used for per-owner uniqueness checks.
    #[must_use]
    pub fn uniqueness_key(&self) -> String {
        uniqueness_key(&self.0)
    }
}

/// Case-folds a raw title for uniqueness comparisons.
pub(crate) fn uniqueness_key(value: &str) -> String {
    value.trim().to_lowercase()
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Title {
    type Error = TitleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(value: Title) -> Self {
        value.0
    }
}
