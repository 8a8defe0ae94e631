//! Shared wiring for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskhub::{
    comment::{adapters::memory::InMemoryCommentRepository, services::CommentService},
    sharing::{
        adapters::memory::InMemoryTaskShareRepository,
        services::{SharingPolicy, SharingService},
    },
    tag::{adapters::memory::InMemoryTagRepository, services::TagService},
    task::{
        adapters::memory::InMemoryTaskRepository,
        services::{TaskCascade, TaskService},
    },
    task_list::{adapters::memory::InMemoryTaskListRepository, services::TaskListService},
    user::{
        adapters::memory::InMemoryUserRepository,
        domain::User,
        services::{RegisterUserRequest, UserDirectory},
    },
};

/// User directory wired to in-memory stores.
pub type Users = UserDirectory<
    InMemoryUserRepository,
    InMemoryTaskRepository,
    InMemoryTaskShareRepository,
    DefaultClock,
>;
/// Task list service wired to in-memory stores.
pub type Lists = TaskListService<
    InMemoryTaskListRepository,
    InMemoryTaskRepository,
    InMemoryTaskShareRepository,
    InMemoryCommentRepository,
    DefaultClock,
>;
/// Task service wired to in-memory stores.
pub type Tasks = TaskService<
    InMemoryTaskRepository,
    InMemoryTaskListRepository,
    InMemoryTaskShareRepository,
    InMemoryCommentRepository,
    DefaultClock,
>;
/// Tag service wired to in-memory stores.
pub type Tags = TagService<
    InMemoryTagRepository,
    InMemoryTaskRepository,
    InMemoryTaskShareRepository,
    DefaultClock,
>;
/// Comment service wired to in-memory stores.
pub type Comments = CommentService<
    InMemoryCommentRepository,
    InMemoryTaskRepository,
    InMemoryTaskShareRepository,
    DefaultClock,
>;
/// Sharing service wired to in-memory stores.
pub type Sharing =
    SharingService<InMemoryTaskRepository, InMemoryTaskShareRepository, InMemoryUserRepository>;

/// Every application service sharing one set of in-memory stores.
pub struct App {
    pub users: Users,
    pub lists: Lists,
    pub tasks: Tasks,
    pub tags: Tags,
    pub comments: Comments,
    pub sharing: Sharing,
}

impl App {
    /// Wires all services to fresh stores.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let user_repo = Arc::new(InMemoryUserRepository::new());
        let list_repo = Arc::new(InMemoryTaskListRepository::new());
        let task_repo = Arc::new(InMemoryTaskRepository::new());
        let share_repo = Arc::new(InMemoryTaskShareRepository::new());
        let tag_repo = Arc::new(InMemoryTagRepository::new());
        let comment_repo = Arc::new(InMemoryCommentRepository::new());

        let cascade = TaskCascade::new(
            Arc::clone(&task_repo),
            Arc::clone(&share_repo),
            Arc::clone(&comment_repo),
        );

        Self {
            users: UserDirectory::new(
                Arc::clone(&user_repo),
                SharingPolicy::new(Arc::clone(&task_repo), Arc::clone(&share_repo)),
                Arc::clone(&clock),
            ),
            lists: TaskListService::new(Arc::clone(&list_repo), cascade, Arc::clone(&clock)),
            tasks: TaskService::new(
                Arc::clone(&task_repo),
                Arc::clone(&list_repo),
                Arc::clone(&share_repo),
                Arc::clone(&comment_repo),
                Arc::clone(&clock),
            ),
            tags: TagService::new(
                tag_repo,
                Arc::clone(&task_repo),
                Arc::clone(&share_repo),
                Arc::clone(&clock),
            ),
            comments: CommentService::new(
                comment_repo,
                Arc::clone(&task_repo),
                Arc::clone(&share_repo),
                Arc::clone(&clock),
            ),
            sharing: SharingService::new(task_repo, share_repo, user_repo),
        }
    }

    /// Registers a user whose display name is the local part of `email`.
    ///
    /// # Errors
    ///
    /// Returns an error if registration fails.
    pub async fn register(&self, email: &str) -> eyre::Result<User> {
        let display_name = email.split('@').next().unwrap_or(email);
        Ok(self
            .users
            .register(RegisterUserRequest::new(email, display_name))
            .await?)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Provides a freshly wired application for each test.
#[fixture]
pub fn app() -> App {
    App::new()
}
