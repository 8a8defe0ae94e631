//! In-memory repository for task lists.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    naming::uniqueness_key,
    task_list::{
        domain::{TaskList, TaskListId},
        ports::{TaskListRepository, TaskListRepositoryError, TaskListRepositoryResult},
    },
    user::domain::UserId,
};

/// Thread-safe in-memory task list repository.
///
/// Enforces per-owner, case-insensitive title uniqueness the way a unique
/// index would.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskListRepository {
    state: Arc<RwLock<InMemoryTaskListState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskListState {
    lists: HashMap<TaskListId, TaskList>,
    title_index: HashMap<(UserId, String), TaskListId>,
}

impl InMemoryTaskListRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> TaskListRepositoryError {
    TaskListRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn title_key(list: &TaskList) -> (UserId, String) {
    (list.owner_id(), list.title().uniqueness_key())
}

#[async_trait]
impl TaskListRepository for InMemoryTaskListRepository {
    async fn store(&self, list: &TaskList) -> TaskListRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.lists.contains_key(&list.id()) {
            return Err(TaskListRepositoryError::DuplicateTaskList(list.id()));
        }

        let key = title_key(list);
        if state.title_index.contains_key(&key) {
            return Err(TaskListRepositoryError::DuplicateTitle(list.title().clone()));
        }

        state.title_index.insert(key, list.id());
        state.lists.insert(list.id(), list.clone());
        Ok(())
    }

    async fn update(&self, list: &TaskList) -> TaskListRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let old_key = state
            .lists
            .get(&list.id())
            .map(title_key)
            .ok_or(TaskListRepositoryError::NotFound(list.id()))?;

        let new_key = title_key(list);
        let collides = state
            .title_index
            .get(&new_key)
            .is_some_and(|holder| *holder != list.id());
        if collides {
            return Err(TaskListRepositoryError::DuplicateTitle(list.title().clone()));
        }

        state.title_index.remove(&old_key);
        state.title_index.insert(new_key, list.id());
        state.lists.insert(list.id(), list.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskListId) -> TaskListRepositoryResult<Option<TaskList>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.lists.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> TaskListRepositoryResult<Vec<TaskList>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut lists: Vec<TaskList> = state
            .lists
            .values()
            .filter(|list| list.is_owned_by(owner_id))
            .cloned()
            .collect();
        lists.sort_by_key(TaskList::created_at);
        Ok(lists)
    }

    async fn exists_title_for_owner(
        &self,
        owner_id: UserId,
        title: &str,
    ) -> TaskListRepositoryResult<bool> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .title_index
            .contains_key(&(owner_id, uniqueness_key(title))))
    }

    async fn delete(&self, id: TaskListId) -> TaskListRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let removed = state
            .lists
            .remove(&id)
            .ok_or(TaskListRepositoryError::NotFound(id))?;
        state.title_index.remove(&title_key(&removed));
        Ok(())
    }
}
