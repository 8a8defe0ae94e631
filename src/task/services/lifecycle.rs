//! Service layer for task creation, access-gated reads and updates, and
//! status changes.

use super::{TaskCascade, TaskCascadeError};
use crate::{
    comment::ports::CommentRepository,
    naming::Title,
    sharing::{
        ports::{TaskShareRepository, TaskShareRepositoryError},
        services::{AccessError, TaskAccessAuthority},
    },
    task::{
        domain::{
            NewTask, Task, TaskDetailsUpdate, TaskDomainError, TaskId, TaskOrdering, TaskStatus,
            sort_tasks,
        },
        ports::{TaskRepository, TaskRepositoryError},
    },
    task_list::{
        domain::TaskListId,
        ports::{TaskListRepository, TaskListRepositoryError},
    },
    user::domain::UserId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    list_id: TaskListId,
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(list_id: TaskListId, title: impl Into<String>) -> Self {
        Self {
            list_id,
            title: title.into(),
            description: None,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for a partial task update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<Option<String>>,
    due_date: Option<Option<DateTime<Utc>>>,
}

impl UpdateTaskRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The requester may not act on the task.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Task list repository operation failed.
    #[error(transparent)]
    TaskLists(#[from] TaskListRepositoryError),
    /// Grant lookup failed.
    #[error(transparent)]
    Shares(#[from] TaskShareRepositoryError),
    /// Task removal failed.
    #[error(transparent)]
    Cascade(#[from] TaskCascadeError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
    /// No task list exists with the given identifier.
    #[error("task list {0} not found")]
    ListNotFound(TaskListId),
    /// The requester does not own the task list.
    #[error("user {user_id} does not own task list {list_id}")]
    ListAccessDenied {
        /// List the user tried to act on.
        list_id: TaskListId,
        /// User that was refused.
        user_id: UserId,
    },
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Every operation on an existing task first asks the
/// [`TaskAccessAuthority`]; owners and grantees get the same access except
/// for deletion, which is owner-only.
#[derive(Clone)]
pub struct TaskService<T, L, S, M, C>
where
    T: TaskRepository,
    L: TaskListRepository,
    S: TaskShareRepository,
    M: CommentRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    lists: Arc<L>,
    shares: Arc<S>,
    authority: TaskAccessAuthority<T, S>,
    cascade: TaskCascade<T, S, M>,
    clock: Arc<C>,
}

impl<T, L, S, M, C> TaskService<T, L, S, M, C>
where
    T: TaskRepository,
    L: TaskListRepository,
    S: TaskShareRepository,
    M: CommentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub fn new(
        tasks: Arc<T>,
        lists: Arc<L>,
        shares: Arc<S>,
        comments: Arc<M>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            authority: TaskAccessAuthority::new(Arc::clone(&tasks), Arc::clone(&shares)),
            cascade: TaskCascade::new(Arc::clone(&tasks), Arc::clone(&shares), comments),
            tasks,
            lists,
            shares,
            clock,
        }
    }

    /// Returns the access authority guarding task operations.
    #[must_use]
    pub const fn authority(&self) -> &TaskAccessAuthority<T, S> {
        &self.authority
    }

    /// Creates a task in a list owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ListNotFound`] or
    /// [`TaskServiceError::ListAccessDenied`] when the list is missing or
    /// owned by someone else, [`TaskServiceError::Domain`] for an invalid
    /// title, and repository errors.
    pub async fn create_task(
        &self,
        owner_id: UserId,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            list_id,
            title,
            description,
            due_date,
        } = request;

        let list = self
            .lists
            .find_by_id(list_id)
            .await?
            .ok_or(TaskServiceError::ListNotFound(list_id))?;
        if !list.is_owned_by(owner_id) {
            return Err(TaskServiceError::ListAccessDenied {
                list_id,
                user_id: owner_id,
            });
        }

        let fields = NewTask {
            title: Title::new(title).map_err(TaskDomainError::from)?,
            description,
            due_date,
        };
        let task = Task::new(&list, fields, &*self.clock);
        self.tasks.store(&task).await?;
        info!(task_id = %task.id(), %list_id, "task created");
        Ok(task)
    }

    /// Returns a task the requester may access.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Access`] when the task does not exist or
    /// the requester has no access, and repository errors.
    pub async fn get_task(
        &self,
        task_id: TaskId,
        requester_id: UserId,
    ) -> TaskServiceResult<Task> {
        self.authority.ensure_access(task_id, requester_id).await?;
        self.load(task_id).await
    }

    /// Applies a partial update to a task's title, description and due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Access`] when the requester has no
    /// access, [`TaskServiceError::Domain`] for an invalid title, and
    /// repository errors.
    pub async fn update_task(
        &self,
        task_id: TaskId,
        requester_id: UserId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<Task> {
        self.authority.ensure_access(task_id, requester_id).await?;
        let mut task = self.load(task_id).await?;

        let update = TaskDetailsUpdate {
            title: request
                .title
                .map(Title::new)
                .transpose()
                .map_err(TaskDomainError::from)?,
            description: request.description,
            due_date: request.due_date,
        };
        if task.apply_details(update, &*self.clock) {
            self.tasks.update(&task).await?;
        }
        Ok(task)
    }

    /// Changes a task's status from a request value such as `"in_progress"`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatus`] (wrapped) for an unknown
    /// value, in addition to the errors of [`Self::change_status_to`].
    pub async fn change_status(
        &self,
        task_id: TaskId,
        requester_id: UserId,
        status: &str,
    ) -> TaskServiceResult<Task> {
        self.authority.ensure_access(task_id, requester_id).await?;
        let target = TaskStatus::try_from(status).map_err(TaskDomainError::from)?;
        self.apply_status(task_id, target).await
    }

    /// Changes a task's status.
    ///
    /// Requesting the current status succeeds without writing anything.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CompletedTaskLocked`] (wrapped) when the
    /// task is done and `status` is not, [`TaskServiceError::Access`] when
    /// the requester has no access, and repository errors.
    pub async fn change_status_to(
        &self,
        task_id: TaskId,
        requester_id: UserId,
        status: TaskStatus,
    ) -> TaskServiceResult<Task> {
        self.authority.ensure_access(task_id, requester_id).await?;
        self.apply_status(task_id, status).await
    }

    /// Lists the tasks of a list owned by the requester.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::ListNotFound`] or
    /// [`TaskServiceError::ListAccessDenied`], and repository errors.
    pub async fn list_tasks(
        &self,
        list_id: TaskListId,
        requester_id: UserId,
        ordering: TaskOrdering,
    ) -> TaskServiceResult<Vec<Task>> {
        let list = self
            .lists
            .find_by_id(list_id)
            .await?
            .ok_or(TaskServiceError::ListNotFound(list_id))?;
        if !list.is_owned_by(requester_id) {
            return Err(TaskServiceError::ListAccessDenied {
                list_id,
                user_id: requester_id,
            });
        }

        let mut tasks = self.tasks.list_by_list(list_id).await?;
        sort_tasks(&mut tasks, ordering);
        Ok(tasks)
    }

    /// Lists the tasks other users have shared with `user_id`.
    ///
    /// # Errors
    ///
    /// Returns repository errors.
    pub async fn list_shared_with(
        &self,
        user_id: UserId,
        ordering: TaskOrdering,
    ) -> TaskServiceResult<Vec<Task>> {
        let task_ids = self.shares.list_tasks_for_user(user_id).await?;
        let mut tasks = self.tasks.find_by_ids(&task_ids).await?;
        sort_tasks(&mut tasks, ordering);
        Ok(tasks)
    }

    /// Deletes a task with its grants and comments. Owner only.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NotOwner`] (wrapped) for non-owners,
    /// [`AccessError::TaskNotFound`] for unknown tasks, and cascade errors.
    pub async fn delete_task(
        &self,
        task_id: TaskId,
        requester_id: UserId,
    ) -> TaskServiceResult<()> {
        self.authority.ensure_owner(task_id, requester_id).await?;
        self.cascade.remove_task(task_id).await?;
        Ok(())
    }

    async fn apply_status(&self, task_id: TaskId, status: TaskStatus) -> TaskServiceResult<Task> {
        let mut task = self.load(task_id).await?;
        let change = task.change_status(status, &*self.clock)?;
        if change.is_changed() {
            self.tasks.update(&task).await?;
            info!(%task_id, ?change, "task status changed");
        } else {
            debug!(%task_id, %status, "task already has requested status");
        }
        Ok(task)
    }

    async fn load(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))
    }
}
