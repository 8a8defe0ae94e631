//! Task aggregate root.

use super::{StatusChange, TaskDomainError, TaskId, TaskStatus};
use crate::{
    naming::Title,
    tag::domain::TagId,
    task_list::domain::{TaskList, TaskListId},
    user::domain::UserId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner_id: UserId,
    list_id: TaskListId,
    title: Title,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    status: TaskStatus,
    tag_id: Option<TagId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Task title.
    pub title: Title,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Creates a new-task payload with only a title.
    #[must_use]
    pub const fn new(title: Title) -> Self {
        Self {
            title,
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

/// Partial update of a task's descriptive fields.
///
/// `None` leaves a field untouched; `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDetailsUpdate {
    /// Replacement title.
    pub title: Option<Title>,
    /// Replacement or cleared description.
    pub description: Option<Option<String>>,
    /// Replacement or cleared due date.
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl TaskDetailsUpdate {
    /// Returns whether the update carries no changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.due_date.is_none()
    }
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning user.
    pub owner_id: UserId,
    /// Persisted parent list.
    pub list_id: TaskListId,
    /// Persisted title.
    pub title: Title,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted tag reference, if any.
    pub tag_id: Option<TagId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task inside `list`.
    ///
    /// The task's owner is the list's owner and never changes afterwards.
    /// New tasks start as [`TaskStatus::NotStarted`] without a tag.
    #[must_use]
    pub fn new(list: &TaskList, fields: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            owner_id: list.owner_id(),
            list_id: list.id(),
            title: fields.title,
            description: fields.description,
            due_date: fields.due_date,
            status: TaskStatus::NotStarted,
            tag_id: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            list_id: data.list_id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            tag_id: data.tag_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the parent list.
    #[must_use]
    pub const fn list_id(&self) -> TaskListId {
        self.list_id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the attached tag, if any.
    #[must_use]
    pub const fn tag_id(&self) -> Option<TagId> {
        self.tag_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether `user_id` owns this task.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    /// Moves the task to `status`.
    ///
    /// Requesting the current status succeeds without touching any field.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CompletedTaskLocked`] when the task is
    /// [`TaskStatus::Done`] and `status` is anything else.
    pub fn change_status(
        &mut self,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Result<StatusChange, TaskDomainError> {
        if status == self.status {
            return Ok(StatusChange::Unchanged);
        }
        if !self.status.can_transition_to(status) {
            return Err(TaskDomainError::CompletedTaskLocked {
                task_id: self.id,
                to: status,
            });
        }

        let from = self.status;
        self.status = status;
        self.touch(clock);
        Ok(StatusChange::Changed { from, to: status })
    }

    /// Applies a partial update of descriptive fields.
    ///
    /// Returns whether any field changed; `updated_at` moves only then.
    pub fn apply_details(&mut self, update: TaskDetailsUpdate, clock: &impl Clock) -> bool {
        let mut changed = false;
        if let Some(title) = update.title {
            changed |= replace_if_different(&mut self.title, title);
        }
        if let Some(description) = update.description {
            changed |= replace_if_different(&mut self.description, description);
        }
        if let Some(due_date) = update.due_date {
            changed |= replace_if_different(&mut self.due_date, due_date);
        }
        if changed {
            self.touch(clock);
        }
        changed
    }

    /// Attaches `tag_id`, replacing any previous tag.
    pub fn attach_tag(&mut self, tag_id: TagId, clock: &impl Clock) {
        if self.tag_id == Some(tag_id) {
            return;
        }
        self.tag_id = Some(tag_id);
        self.touch(clock);
    }

    /// Clears the tag reference. The tag itself is unaffected.
    ///
    /// Returns whether a tag was attached.
    pub fn detach_tag(&mut self, clock: &impl Clock) -> bool {
        if self.tag_id.take().is_none() {
            return false;
        }
        self.touch(clock);
        true
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Stores `new_value` in `field` and reports whether it differed.
fn replace_if_different<T: PartialEq>(field: &mut T, new_value: T) -> bool {
    if *field == new_value {
        return false;
    }
    *field = new_value;
    true
}
