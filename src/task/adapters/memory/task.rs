//! In-memory repository for tasks.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    tag::domain::TagId,
    task::{
        domain::{Task, TaskId},
        ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    },
    task_list::domain::TaskListId,
    user::domain::UserId,
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    list_index: HashMap<TaskListId, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Removes a task ID from the list index, cleaning up the entry if empty.
fn remove_from_list_index(state: &mut InMemoryTaskState, list_id: TaskListId, task_id: TaskId) {
    if let Some(ids) = state.list_index.get_mut(&list_id) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            state.list_index.remove(&list_id);
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        state
            .list_index
            .entry(task.list_id())
            .or_default()
            .push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *stored = task.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_owner(&self, id: TaskId) -> TaskRepositoryResult<Option<UserId>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).map(Task::owner_id))
    }

    async fn find_by_ids(&self, ids: &[TaskId]) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(ids
            .iter()
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect())
    }

    async fn list_by_list(&self, list_id: TaskListId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .list_index
            .get(&list_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_by_tag(&self, tag_id: TagId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.tag_id() == Some(tag_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let removed = state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        remove_from_list_index(&mut state, removed.list_id(), id);
        Ok(())
    }
}
