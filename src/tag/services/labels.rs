//! Service layer for tag creation, attachment and deletion.

use crate::{
    naming::{
        DisambiguationConfig, DisambiguationError, Title, TitleDisambiguator, TitleError,
        TitleKind,
    },
    sharing::{
        ports::TaskShareRepository,
        services::{AccessError, TaskAccessAuthority},
    },
    tag::{
        domain::{Tag, TagId},
        ports::{TagRepository, TagRepositoryError},
    },
    task::{
        domain::{Task, TaskId},
        ports::{TaskRepository, TaskRepositoryError},
    },
    user::domain::UserId,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for tag operations.
#[derive(Debug, Error)]
pub enum TagServiceError {
    /// The requested or resolved name is invalid.
    #[error(transparent)]
    Title(#[from] TitleError),
    /// No free name was found within the configured probe cap.
    #[error("no free tag name derived from '{title}' after {attempts} attempts")]
    NameExhausted {
        /// The name the caller asked for.
        title: String,
        /// Number of probes issued.
        attempts: u32,
    },
    /// Tag repository operation failed.
    #[error(transparent)]
    Repository(#[from] TagRepositoryError),
    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// The requester may not act on the task.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// No tag exists with the given identifier.
    #[error("tag {0} not found")]
    NotFound(TagId),
    /// The requester does not own the tag.
    #[error("user {user_id} does not own tag {tag_id}")]
    AccessDenied {
        /// Tag the user tried to use.
        tag_id: TagId,
        /// User that was refused.
        user_id: UserId,
    },
}

impl From<DisambiguationError<TagRepositoryError>> for TagServiceError {
    fn from(err: DisambiguationError<TagRepositoryError>) -> Self {
        match err {
            DisambiguationError::Exhausted { title, attempts } => {
                Self::NameExhausted { title, attempts }
            }
            DisambiguationError::Probe(probe_err) => Self::Repository(probe_err),
        }
    }
}

/// Result type for tag service operations.
pub type TagServiceResult<T> = Result<T, TagServiceError>;

/// Tag orchestration service.
///
/// Tags are private to their owner and can only be attached to tasks the
/// same user owns.
#[derive(Clone)]
pub struct TagService<G, T, S, C>
where
    G: TagRepository,
    T: TaskRepository,
    S: TaskShareRepository,
    C: Clock + Send + Sync,
{
    tags: Arc<G>,
    tasks: Arc<T>,
    authority: TaskAccessAuthority<T, S>,
    disambiguator: TitleDisambiguator,
    clock: Arc<C>,
}

impl<G, T, S, C> TagService<G, T, S, C>
where
    G: TagRepository,
    T: TaskRepository,
    S: TaskShareRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new tag service with the default probe cap.
    #[must_use]
    pub fn new(tags: Arc<G>, tasks: Arc<T>, shares: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            authority: TaskAccessAuthority::new(Arc::clone(&tasks), shares),
            tags,
            tasks,
            disambiguator: TitleDisambiguator::new(),
            clock,
        }
    }

    /// Replaces the name disambiguation limits.
    #[must_use]
    pub fn with_config(mut self, config: DisambiguationConfig) -> Self {
        self.disambiguator = TitleDisambiguator::with_config(config);
        self
    }

    /// Creates a tag for `owner_id`, suffixing the name on collision.
    ///
    /// # Errors
    ///
    /// Returns [`TagServiceError::Title`] for an invalid name,
    /// [`TagServiceError::NameExhausted`] when no variant is free, and
    /// repository errors.
    pub async fn create(&self, owner_id: UserId, name: &str) -> TagServiceResult<Tag> {
        let desired = Title::new(name)?;
        let tags = Arc::clone(&self.tags);
        let resolved = self
            .disambiguator
            .resolve(TitleKind::Tag, desired.as_str(), |candidate| {
                let probe_tags = Arc::clone(&tags);
                async move { probe_tags.exists_name_for_owner(owner_id, &candidate).await }
            })
            .await?;

        let tag = Tag::new(owner_id, Title::new(resolved)?, &*self.clock);
        self.tags.store(&tag).await?;
        info!(tag_id = %tag.id(), %owner_id, name = %tag.name(), "tag created");
        Ok(tag)
    }

    /// Returns every tag owned by `owner_id`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns repository errors.
    pub async fn list_for_owner(&self, owner_id: UserId) -> TagServiceResult<Vec<Tag>> {
        Ok(self.tags.list_by_owner(owner_id).await?)
    }

    /// Attaches an owned tag to an owned task, replacing any previous tag.
    ///
    /// # Errors
    ///
    /// Returns [`TagServiceError::NotFound`] or
    /// [`TagServiceError::AccessDenied`] for the tag,
    /// [`AccessError::NotOwner`] (wrapped) for the task, and repository
    /// errors.
    pub async fn attach_to_task(
        &self,
        task_id: TaskId,
        tag_id: TagId,
        requester_id: UserId,
    ) -> TagServiceResult<Task> {
        self.owned_tag(tag_id, requester_id).await?;
        let mut task = self.owned_task(task_id, requester_id).await?;
        if task.tag_id() != Some(tag_id) {
            task.attach_tag(tag_id, &*self.clock);
            self.tasks.update(&task).await?;
            info!(%task_id, %tag_id, "tag attached");
        }
        Ok(task)
    }

    /// Clears the tag of an owned task. The tag itself is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NotOwner`] (wrapped) for the task, and
    /// repository errors.
    pub async fn detach_from_task(
        &self,
        task_id: TaskId,
        requester_id: UserId,
    ) -> TagServiceResult<Task> {
        let mut task = self.owned_task(task_id, requester_id).await?;
        if task.detach_tag(&*self.clock) {
            self.tasks.update(&task).await?;
            info!(%task_id, "tag detached");
        }
        Ok(task)
    }

    /// Detaches a tag from every task and deletes it. Owner only.
    ///
    /// # Errors
    ///
    /// Returns [`TagServiceError::NotFound`] or
    /// [`TagServiceError::AccessDenied`], and repository errors.
    pub async fn delete(&self, tag_id: TagId, requester_id: UserId) -> TagServiceResult<()> {
        self.owned_tag(tag_id, requester_id).await?;
        let tagged = self.tasks.find_by_tag(tag_id).await?;
        for mut task in tagged {
            if task.detach_tag(&*self.clock) {
                self.tasks.update(&task).await?;
            }
        }
        self.tags.delete(tag_id).await?;
        info!(%tag_id, "tag deleted");
        Ok(())
    }

    async fn owned_tag(&self, tag_id: TagId, requester_id: UserId) -> TagServiceResult<Tag> {
        let tag = self
            .tags
            .find_by_id(tag_id)
            .await?
            .ok_or(TagServiceError::NotFound(tag_id))?;
        if !tag.is_owned_by(requester_id) {
            return Err(TagServiceError::AccessDenied {
                tag_id,
                user_id: requester_id,
            });
        }
        Ok(tag)
    }

    async fn owned_task(&self, task_id: TaskId, requester_id: UserId) -> TagServiceResult<Task> {
        self.authority.ensure_owner(task_id, requester_id).await?;
        Ok(self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(AccessError::TaskNotFound(task_id))?)
    }
}
