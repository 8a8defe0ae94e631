//! Shared world state for task status BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskhub::{
    comment::adapters::memory::InMemoryCommentRepository,
    sharing::adapters::memory::InMemoryTaskShareRepository,
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::Task,
        services::{TaskService, TaskServiceError},
    },
    task_list::adapters::memory::InMemoryTaskListRepository,
    user::domain::UserId,
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<
    InMemoryTaskRepository,
    InMemoryTaskListRepository,
    InMemoryTaskShareRepository,
    InMemoryCommentRepository,
    DefaultClock,
>;

/// Scenario world for task status behaviour tests.
pub struct TaskStatusWorld {
    pub service: TestTaskService,
    pub lists: Arc<InMemoryTaskListRepository>,
    pub owner: UserId,
    pub task_before_change: Option<Task>,
    pub last_change_result: Option<Result<Task, TaskServiceError>>,
}

impl TaskStatusWorld {
    /// Creates a world with empty stores.
    #[must_use]
    pub fn new() -> Self {
        let lists = Arc::new(InMemoryTaskListRepository::new());
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&lists),
            Arc::new(InMemoryTaskShareRepository::new()),
            Arc::new(InMemoryCommentRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            lists,
            owner: UserId::new(),
            task_before_change: None,
            last_change_result: None,
        }
    }

    /// Returns the task as it was before the step under test.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> eyre::Result<&Task> {
        self.task_before_change
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskStatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStatusWorld {
    TaskStatusWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
