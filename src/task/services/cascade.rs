//! Removal of tasks together with the records that hang off them.

use crate::{
    comment::ports::{CommentRepository, CommentRepositoryError},
    sharing::{
        ports::TaskShareRepository,
        services::{SharingError, SharingPolicy},
    },
    task::{
        domain::TaskId,
        ports::{TaskRepository, TaskRepositoryError},
    },
    task_list::domain::TaskListId,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors returned while removing tasks.
#[derive(Debug, Error)]
pub enum TaskCascadeError {
    /// Task persistence failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Grant removal failed.
    #[error(transparent)]
    Sharing(#[from] SharingError),
    /// Comment removal failed.
    #[error(transparent)]
    Comments(#[from] CommentRepositoryError),
}

/// Result type for cascade operations.
pub type TaskCascadeResult<T> = Result<T, TaskCascadeError>;

/// Deletes tasks after their grants and comments.
///
/// Dependents are removed before the task record, so an interrupted
/// removal leaves at worst a task with fewer grants or comments, never
/// grants or comments pointing at a missing task. Callers perform any
/// authorization beforehand.
#[derive(Clone)]
pub struct TaskCascade<T, S, M>
where
    T: TaskRepository,
    S: TaskShareRepository,
    M: CommentRepository,
{
    tasks: Arc<T>,
    sharing: SharingPolicy<T, S>,
    comments: Arc<M>,
}

impl<T, S, M> TaskCascade<T, S, M>
where
    T: TaskRepository,
    S: TaskShareRepository,
    M: CommentRepository,
{
    /// Creates a new cascade helper.
    #[must_use]
    pub fn new(tasks: Arc<T>, shares: Arc<S>, comments: Arc<M>) -> Self {
        Self {
            sharing: SharingPolicy::new(Arc::clone(&tasks), shares),
            tasks,
            comments,
        }
    }

    /// Removes one task with its grants and comments.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist, and persistence errors from any step.
    pub async fn remove_task(&self, task_id: TaskId) -> TaskCascadeResult<()> {
        let revoked = self.sharing.revoke_all_for_task(task_id).await?;
        let comments = self.comments.delete_all_for_task(task_id).await?;
        self.tasks.delete(task_id).await?;
        info!(%task_id, revoked, comments, "task deleted");
        Ok(())
    }

    /// Removes every task in a list and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns persistence errors from any step; tasks removed before the
    /// failure stay removed.
    pub async fn remove_tasks_in_list(&self, list_id: TaskListId) -> TaskCascadeResult<usize> {
        let tasks = self.tasks.list_by_list(list_id).await?;
        for task in &tasks {
            self.remove_task(task.id()).await?;
        }
        Ok(tasks.len())
    }
}
