//! In-memory repository for tags.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    naming::uniqueness_key,
    tag::{
        domain::{Tag, TagId},
        ports::{TagRepository, TagRepositoryError, TagRepositoryResult},
    },
    user::domain::UserId,
};

/// Thread-safe in-memory tag repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTagRepository {
    state: Arc<RwLock<InMemoryTagState>>,
}

#[derive(Debug, Default)]
struct InMemoryTagState {
    tags: HashMap<TagId, Tag>,
    name_index: HashMap<(UserId, String), TagId>,
}

impl InMemoryTagRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> TagRepositoryError {
    TagRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn store(&self, tag: &Tag) -> TagRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tags.contains_key(&tag.id()) {
            return Err(TagRepositoryError::DuplicateTag(tag.id()));
        }

        let key = (tag.owner_id(), tag.name().uniqueness_key());
        if state.name_index.contains_key(&key) {
            return Err(TagRepositoryError::DuplicateName(tag.name().clone()));
        }

        state.name_index.insert(key, tag.id());
        state.tags.insert(tag.id(), tag.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TagId) -> TagRepositoryResult<Option<Tag>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tags.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> TagRepositoryResult<Vec<Tag>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut tags: Vec<Tag> = state
            .tags
            .values()
            .filter(|tag| tag.is_owned_by(owner_id))
            .cloned()
            .collect();
        tags.sort_by_key(Tag::created_at);
        Ok(tags)
    }

    async fn exists_name_for_owner(
        &self,
        owner_id: UserId,
        name: &str,
    ) -> TagRepositoryResult<bool> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .name_index
            .contains_key(&(owner_id, uniqueness_key(name))))
    }

    async fn delete(&self, id: TagId) -> TagRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let removed = state
            .tags
            .remove(&id)
            .ok_or(TagRepositoryError::NotFound(id))?;
        state
            .name_index
            .remove(&(removed.owner_id(), removed.name().uniqueness_key()));
        Ok(())
    }
}
