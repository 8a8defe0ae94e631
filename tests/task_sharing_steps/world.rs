//! Shared world state for task sharing BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskhub::{
    sharing::{
        adapters::memory::InMemoryTaskShareRepository,
        domain::TaskShare,
        services::{SharingService, SharingServiceError},
    },
    task::{adapters::memory::InMemoryTaskRepository, domain::Task},
    task_list::adapters::memory::InMemoryTaskListRepository,
    user::{adapters::memory::InMemoryUserRepository, domain::User},
};

/// Sharing service type used by the BDD world.
pub type TestSharingService =
    SharingService<InMemoryTaskRepository, InMemoryTaskShareRepository, InMemoryUserRepository>;

/// Scenario world for sharing behaviour tests.
pub struct SharingWorld {
    pub service: TestSharingService,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub lists: Arc<InMemoryTaskListRepository>,
    pub users: Arc<InMemoryUserRepository>,
    pub clock: DefaultClock,
    pub registered: HashMap<String, User>,
    pub owner: Option<User>,
    pub task: Option<Task>,
    pub last_grant: Option<Result<TaskShare, SharingServiceError>>,
}

impl SharingWorld {
    /// Creates a world with empty stores.
    #[must_use]
    pub fn new() -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let service = SharingService::new(
            Arc::clone(&tasks),
            Arc::new(InMemoryTaskShareRepository::new()),
            Arc::clone(&users),
        );

        Self {
            service,
            tasks,
            lists: Arc::new(InMemoryTaskListRepository::new()),
            users,
            clock: DefaultClock,
            registered: HashMap::new(),
            owner: None,
            task: None,
            last_grant: None,
        }
    }

    /// Returns the task created by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task(&self) -> eyre::Result<&Task> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Returns the task owner.
    ///
    /// # Errors
    ///
    /// Returns an error when no owner has been registered yet.
    pub fn owner(&self) -> eyre::Result<&User> {
        self.owner
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing owner in scenario world"))
    }

    /// Returns a user registered under `email`.
    ///
    /// # Errors
    ///
    /// Returns an error when nobody registered with that address.
    pub fn user(&self, email: &str) -> eyre::Result<&User> {
        self.registered
            .get(email)
            .ok_or_else(|| eyre::eyre!("no registered user {email}"))
    }
}

impl Default for SharingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SharingWorld {
    SharingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
