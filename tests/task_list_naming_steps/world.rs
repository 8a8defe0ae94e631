//! Shared world state for task list naming BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskhub::{
    comment::adapters::memory::InMemoryCommentRepository,
    sharing::adapters::memory::InMemoryTaskShareRepository,
    task::{adapters::memory::InMemoryTaskRepository, services::TaskCascade},
    task_list::{
        adapters::memory::InMemoryTaskListRepository,
        domain::TaskList,
        services::{TaskListService, TaskListServiceError},
    },
    user::domain::UserId,
};

/// Service type used by the BDD world.
pub type TestListService = TaskListService<
    InMemoryTaskListRepository,
    InMemoryTaskRepository,
    InMemoryTaskShareRepository,
    InMemoryCommentRepository,
    DefaultClock,
>;

/// Scenario world for list naming behaviour tests.
pub struct ListNamingWorld {
    pub service: TestListService,
    pub owner: UserId,
    pub last_created: Option<Result<TaskList, TaskListServiceError>>,
}

impl ListNamingWorld {
    /// Creates a world with empty stores and a single user.
    #[must_use]
    pub fn new() -> Self {
        let cascade = TaskCascade::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(InMemoryTaskShareRepository::new()),
            Arc::new(InMemoryCommentRepository::new()),
        );
        let service = TaskListService::new(
            Arc::new(InMemoryTaskListRepository::new()),
            cascade,
            Arc::new(DefaultClock),
        );

        Self {
            service,
            owner: UserId::new(),
            last_created: None,
        }
    }
}

impl Default for ListNamingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ListNamingWorld {
    ListNamingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
