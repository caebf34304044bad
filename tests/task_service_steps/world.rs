//! Shared world state for task service BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tarefas::task::{
    adapters::memory::{InMemoryRepository, InMemoryStore, InMemoryUnitOfWork},
    domain::{Task, TaskDomainError},
    services::{TaskService, TaskServiceError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryRepository<Task>, InMemoryUnitOfWork<Task>>;

/// Scenario world for task service behaviour tests.
pub struct TaskWorld {
    pub clock: DefaultClock,
    pub service: TestTaskService,
    pub last_validation_error: Option<TaskDomainError>,
    pub last_outcome: Option<Result<bool, TaskServiceError>>,
    pub last_fetched: Option<Task>,
    pub last_listing: Option<Vec<Task>>,
}

impl TaskWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(&InMemoryStore::new())
    }

    /// Rebinds the world to a service over `store`, clearing prior results.
    #[must_use]
    pub fn with_store(store: &InMemoryStore<Task>) -> Self {
        let session = store.session();
        let service = TaskService::new(
            Arc::new(InMemoryRepository::new(session.clone())),
            Arc::new(InMemoryUnitOfWork::new(session)),
        );
        Self {
            clock: DefaultClock,
            service,
            last_validation_error: None,
            last_outcome: None,
            last_fetched: None,
            last_listing: None,
        }
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
