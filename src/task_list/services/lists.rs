//! Service layer for creating, renaming, listing and deleting task lists.

use crate::{
    comment::ports::CommentRepository,
    naming::{
        DisambiguationConfig, DisambiguationError, Title, TitleDisambiguator, TitleError,
        TitleKind, uniqueness_key,
    },
    sharing::ports::TaskShareRepository,
    task::{
        ports::TaskRepository,
        services::{TaskCascade, TaskCascadeError},
    },
    task_list::{
        domain::{TaskList, TaskListId},
        ports::{TaskListRepository, TaskListRepositoryError},
    },
    user::domain::UserId,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for task list operations.
#[derive(Debug, Error)]
pub enum TaskListServiceError {
    /// The requested or resolved title is invalid.
    #[error(transparent)]
    Title(#[from] TitleError),
    /// No free title was found within the configured probe cap.
    #[error("no free task list title derived from '{title}' after {attempts} attempts")]
    TitleExhausted {
        /// The title the caller asked for.
        title: String,
        /// Number of probes issued.
        attempts: u32,
    },
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskListRepositoryError),
    /// Removing the list's tasks failed.
    #[error(transparent)]
    Cascade(#[from] TaskCascadeError),
    /// No task list exists with the given identifier.
    #[error("task list {0} not found")]
    NotFound(TaskListId),
    /// The requester does not own the list.
    #[error("user {user_id} does not own task list {list_id}")]
    AccessDenied {
        /// List the user tried to act on.
        list_id: TaskListId,
        /// User that was refused.
        user_id: UserId,
    },
}

impl From<DisambiguationError<TaskListRepositoryError>> for TaskListServiceError {
    fn from(err: DisambiguationError<TaskListRepositoryError>) -> Self {
        match err {
            DisambiguationError::Exhausted { title, attempts } => {
                Self::TitleExhausted { title, attempts }
            }
            DisambiguationError::Probe(probe_err) => Self::Repository(probe_err),
        }
    }
}

/// Result type for task list service operations.
pub type TaskListServiceResult<T> = Result<T, TaskListServiceError>;

/// Task list orchestration service.
///
/// Lists are private to their owner; only tasks are shared.
#[derive(Clone)]
pub struct TaskListService<L, T, S, M, C>
where
    L: TaskListRepository,
    T: TaskRepository,
    S: TaskShareRepository,
    M: CommentRepository,
    C: Clock + Send + Sync,
{
    lists: Arc<L>,
    cascade: TaskCascade<T, S, M>,
    disambiguator: TitleDisambiguator,
    clock: Arc<C>,
}

impl<L, T, S, M, C> TaskListService<L, T, S, M, C>
where
    L: TaskListRepository,
    T: TaskRepository,
    S: TaskShareRepository,
    M: CommentRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task list service with the default probe cap.
    #[must_use]
    pub fn new(lists: Arc<L>, cascade: TaskCascade<T, S, M>, clock: Arc<C>) -> Self {
        Self {
            lists,
            cascade,
            disambiguator: TitleDisambiguator::new(),
            clock,
        }
    }

    /// Replaces the title disambiguation limits.
    #[must_use]
    pub fn with_config(mut self, config: DisambiguationConfig) -> Self {
        self.disambiguator = TitleDisambiguator::with_config(config);
        self
    }

    /// Creates a task list for `owner_id`.
    ///
    /// When the owner already has a list with this title the new list is
    /// stored under the first free `"<title> (n)"` variant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Title`] for an invalid title,
    /// [`TaskListServiceError::TitleExhausted`] when no variant is free, and
    /// repository errors, including a duplicate title stored concurrently.
    pub async fn create(&self, owner_id: UserId, title: &str) -> TaskListServiceResult<TaskList> {
        let desired = Title::new(title)?;
        let resolved = self.resolve_title(owner_id, &desired, None).await?;
        let list = TaskList::new(owner_id, resolved, &*self.clock);
        self.lists.store(&list).await?;
        info!(list_id = %list.id(), %owner_id, title = %list.title(), "task list created");
        Ok(list)
    }

    /// Renames a task list owned by `requester_id`.
    ///
    /// The list's own current title never counts as a collision, so a list
    /// keeps a suffix it already holds. Any other collision resolves to a
    /// suffixed variant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::NotFound`] or
    /// [`TaskListServiceError::AccessDenied`], plus the errors of
    /// [`Self::create`].
    pub async fn rename(
        &self,
        list_id: TaskListId,
        requester_id: UserId,
        title: &str,
    ) -> TaskListServiceResult<TaskList> {
        let mut list = self.owned_list(list_id, requester_id).await?;
        let desired = Title::new(title)?;

        let resolved = self
            .resolve_title(requester_id, &desired, Some(list.title()))
            .await?;
        list.rename(resolved, &*self.clock);
        self.lists.update(&list).await?;
        Ok(list)
    }

    /// Returns a task list owned by the requester.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::NotFound`] or
    /// [`TaskListServiceError::AccessDenied`], and repository errors.
    pub async fn find(
        &self,
        list_id: TaskListId,
        requester_id: UserId,
    ) -> TaskListServiceResult<TaskList> {
        self.owned_list(list_id, requester_id).await
    }

    /// Returns every list owned by `owner_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns repository errors.
    pub async fn list_for_owner(&self, owner_id: UserId) -> TaskListServiceResult<Vec<TaskList>> {
        Ok(self.lists.list_by_owner(owner_id).await?)
    }

    /// Deletes a list and every task in it, with their grants and comments.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::NotFound`] or
    /// [`TaskListServiceError::AccessDenied`], and cascade or repository
    /// errors.
    pub async fn delete(
        &self,
        list_id: TaskListId,
        requester_id: UserId,
    ) -> TaskListServiceResult<()> {
        self.owned_list(list_id, requester_id).await?;
        let removed_tasks = self.cascade.remove_tasks_in_list(list_id).await?;
        self.lists.delete(list_id).await?;
        info!(%list_id, removed_tasks, "task list deleted");
        Ok(())
    }

    async fn owned_list(
        &self,
        list_id: TaskListId,
        requester_id: UserId,
    ) -> TaskListServiceResult<TaskList> {
        let list = self
            .lists
            .find_by_id(list_id)
            .await?
            .ok_or(TaskListServiceError::NotFound(list_id))?;
        if !list.is_owned_by(requester_id) {
            return Err(TaskListServiceError::AccessDenied {
                list_id,
                user_id: requester_id,
            });
        }
        Ok(list)
    }

    async fn resolve_title(
        &self,
        owner_id: UserId,
        desired: &Title,
        held: Option<&Title>,
    ) -> TaskListServiceResult<Title> {
        let lists = Arc::clone(&self.lists);
        let held_key = held.map(Title::uniqueness_key);
        let resolved = self
            .disambiguator
            .resolve(TitleKind::TaskList, desired.as_str(), |candidate| {
                let probe_lists = Arc::clone(&lists);
                let own = held_key.as_deref() == Some(uniqueness_key(&candidate).as_str());
                async move {
                    if own {
                        return Ok(false);
                    }
                    probe_lists
                        .exists_title_for_owner(owner_id, &candidate)
                        .await
                }
            })
            .await?;
        Ok(Title::new(resolved)?)
    }
}
