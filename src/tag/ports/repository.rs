//! Repository port for tag persistence and name lookup.

use crate::{
    naming::Title,
    tag::domain::{Tag, TagId},
    user::domain::UserId,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for tag repository operations.
pub type TagRepositoryResult<T> = Result<T, TagRepositoryError>;

/// Tag persistence contract.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Stores a new tag.
    ///
    /// # Errors
    ///
    /// Returns [`TagRepositoryError::DuplicateTag`] when the ID already
    /// exists or [`TagRepositoryError::DuplicateName`] when the owner already
    /// has a tag with the same name, ignoring case.
    async fn store(&self, tag: &Tag) -> TagRepositoryResult<()>;

    /// Finds a tag by identifier.
    ///
    /// Returns `None` when the tag does not exist.
    async fn find_by_id(&self, id: TagId) -> TagRepositoryResult<Option<Tag>>;

    /// Returns every tag owned by `owner_id`, oldest first.
    async fn list_by_owner(&self, owner_id: UserId) -> TagRepositoryResult<Vec<Tag>>;

    /// Returns whether `owner_id` already has a tag named `name`, compared
    /// case-insensitively.
    async fn exists_name_for_owner(&self, owner_id: UserId, name: &str)
    -> TagRepositoryResult<bool>;

    /// Deletes a tag record.
    ///
    /// # Errors
    ///
    /// Returns [`TagRepositoryError::NotFound`] when the tag does not exist.
    async fn delete(&self, id: TagId) -> TagRepositoryResult<()>;
}

/// Errors returned by tag repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TagRepositoryError {
    /// A tag with the same identifier already exists.
    #[error("duplicate tag identifier: {0}")]
    DuplicateTag(TagId),

    /// The owner already has a tag with this name.
    #[error("tag name already in use: {0}")]
    DuplicateName(Title),

    /// The tag was not found.
    #[error("tag not found: {0}")]
    NotFound(TagId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TagRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
