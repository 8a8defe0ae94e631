//! In-memory repository for sharing grants.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use crate::{
    sharing::{
        domain::TaskShare,
        ports::{TaskShareRepository, TaskShareRepositoryError, TaskShareRepositoryResult},
    },
    task::domain::TaskId,
    user::domain::UserId,
};

/// Thread-safe in-memory grant repository keyed by `(task, user)`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskShareRepository {
    shares: Arc<RwLock<BTreeSet<(TaskId, UserId)>>>,
}

impl InMemoryTaskShareRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> TaskShareRepositoryError {
    TaskShareRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Removes every pair matching `predicate` and returns the count.
fn remove_matching(
    shares: &mut BTreeSet<(TaskId, UserId)>,
    predicate: impl Fn(&(TaskId, UserId)) -> bool,
) -> usize {
    let before = shares.len();
    shares.retain(|pair| !predicate(pair));
    before - shares.len()
}

#[async_trait]
impl TaskShareRepository for InMemoryTaskShareRepository {
    async fn exists(&self, task_id: TaskId, user_id: UserId) -> TaskShareRepositoryResult<bool> {
        let shares = self.shares.read().map_err(lock_error)?;
        Ok(shares.contains(&(task_id, user_id)))
    }

    async fn insert(&self, share: &TaskShare) -> TaskShareRepositoryResult<()> {
        let mut shares = self.shares.write().map_err(lock_error)?;
        if !shares.insert((share.task_id(), share.user_id())) {
            return Err(TaskShareRepositoryError::DuplicateShare(*share));
        }
        Ok(())
    }

    async fn delete(&self, task_id: TaskId, user_id: UserId) -> TaskShareRepositoryResult<bool> {
        let mut shares = self.shares.write().map_err(lock_error)?;
        Ok(shares.remove(&(task_id, user_id)))
    }

    async fn delete_all_for_task(&self, task_id: TaskId) -> TaskShareRepositoryResult<usize> {
        let mut shares = self.shares.write().map_err(lock_error)?;
        Ok(remove_matching(&mut shares, |(task, _)| *task == task_id))
    }

    async fn delete_all_for_user(&self, user_id: UserId) -> TaskShareRepositoryResult<usize> {
        let mut shares = self.shares.write().map_err(lock_error)?;
        Ok(remove_matching(&mut shares, |(_, user)| *user == user_id))
    }

    async fn list_users_for_task(
        &self,
        task_id: TaskId,
    ) -> TaskShareRepositoryResult<Vec<UserId>> {
        let shares = self.shares.read().map_err(lock_error)?;
        Ok(shares
            .iter()
            .filter(|(task, _)| *task == task_id)
            .map(|(_, user)| *user)
            .collect())
    }

    async fn list_tasks_for_user(
        &self,
        user_id: UserId,
    ) -> TaskShareRepositoryResult<Vec<TaskId>> {
        let shares = self.shares.read().map_err(lock_error)?;
        Ok(shares
            .iter()
            .filter(|(_, user)| *user == user_id)
            .map(|(task, _)| *task)
            .collect())
    }
}
