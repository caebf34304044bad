//! Per-request construction of task services.
//!
//! Each call opens a fresh session so a repository and its unit of work
//! share one staging area and nothing leaks between requests.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use super::{TaskService, TaskServiceResult};
use crate::task::{
    adapters::{
        memory::{InMemoryRepository, InMemoryStore, InMemoryUnitOfWork},
        sqlite::{SqliteSession, SqliteTaskRepository, SqliteUnitOfWork, TaskSqlitePool},
    },
    domain::Task,
    ports::{Repository, UnitOfWork},
};

/// Builds a [`TaskService`] bound to a new session.
#[async_trait]
pub trait TaskServiceProvider: Send + Sync + 'static {
    /// Repository used by provided services.
    type Repository: Repository<Task> + 'static;
    /// Unit of work used by provided services.
    type UnitOfWork: UnitOfWork + 'static;
    /// Clock stamping tasks built from request payloads.
    type Clock: Clock + Send + Sync;

    /// Opens a session and returns a service bound to it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`](super::TaskServiceError::Repository)
    /// when no storage session can be opened.
    async fn task_service(
        &self,
    ) -> TaskServiceResult<TaskService<Self::Repository, Self::UnitOfWork>>;

    /// Returns the clock used for new tasks.
    fn clock(&self) -> &Self::Clock;
}

/// Provider backed by a SQLite connection pool.
pub struct SqliteServiceProvider {
    pool: TaskSqlitePool,
    clock: DefaultClock,
}

impl SqliteServiceProvider {
    /// Creates a provider drawing sessions from `pool`.
    #[must_use]
    pub const fn new(pool: TaskSqlitePool) -> Self {
        Self {
            pool,
            clock: DefaultClock,
        }
    }
}

#[async_trait]
impl TaskServiceProvider for SqliteServiceProvider {
    type Repository = SqliteTaskRepository;
    type UnitOfWork = SqliteUnitOfWork;
    type Clock = DefaultClock;

    async fn task_service(&self) -> TaskServiceResult<TaskService<SqliteTaskRepository, SqliteUnitOfWork>> {
        let session = SqliteSession::open(&self.pool).await?;
        Ok(TaskService::new(
            Arc::new(SqliteTaskRepository::new(session.clone())),
            Arc::new(SqliteUnitOfWork::new(session)),
        ))
    }

    fn clock(&self) -> &DefaultClock {
        &self.clock
    }
}

/// Provider backed by an [`InMemoryStore`].
pub struct InMemoryServiceProvider<C = DefaultClock>
where
    C: Clock + Send + Sync + 'static,
{
    store: InMemoryStore<Task>,
    clock: C,
}

impl InMemoryServiceProvider {
    /// Creates a provider over `store` using the system clock.
    #[must_use]
    pub const fn new(store: InMemoryStore<Task>) -> Self {
        Self::with_clock(store, DefaultClock)
    }
}

impl<C> InMemoryServiceProvider<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Creates a provider over `store` using `clock`.
    #[must_use]
    pub const fn with_clock(store: InMemoryStore<Task>, clock: C) -> Self {
        Self { store, clock }
    }

    /// Returns the shared store.
    #[must_use]
    pub const fn store(&self) -> &InMemoryStore<Task> {
        &self.store
    }
}

#[async_trait]
impl<C> TaskServiceProvider for InMemoryServiceProvider<C>
where
    C: Clock + Send + Sync + 'static,
{
    type Repository = InMemoryRepository<Task>;
    type UnitOfWork = InMemoryUnitOfWork<Task>;
    type Clock = C;

    async fn task_service(
        &self,
    ) -> TaskServiceResult<TaskService<InMemoryRepository<Task>, InMemoryUnitOfWork<Task>>> {
        let session = self.store.session();
        Ok(TaskService::new(
            Arc::new(InMemoryRepository::new(session.clone())),
            Arc::new(InMemoryUnitOfWork::new(session)),
        ))
    }

    fn clock(&self) -> &C {
        &self.clock
    }
}
