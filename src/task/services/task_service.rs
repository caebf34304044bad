//! Service layer orchestrating task repository and unit-of-work calls.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::task::{
    domain::{Task, TaskId},
    ports::{EntityPredicate, Repository, RepositoryError, UnitOfWork},
};

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Repository or commit failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Every mutating call stages through the repository and then commits the
/// unit of work once; the affected-row count decides the boolean outcome.
pub struct TaskService<R, U>
where
    R: Repository<Task>,
    U: UnitOfWork,
{
    repository: Arc<R>,
    unit_of_work: Arc<U>,
}

impl<R, U> Clone for TaskService<R, U>
where
    R: Repository<Task>,
    U: UnitOfWork,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            unit_of_work: Arc::clone(&self.unit_of_work),
        }
    }
}

impl<R, U> TaskService<R, U>
where
    R: Repository<Task>,
    U: UnitOfWork,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, unit_of_work: Arc<U>) -> Self {
        Self {
            repository,
            unit_of_work,
        }
    }

    /// Inserts a task and commits.
    ///
    /// Returns `false` when the commit affected no rows.
    ///
    /// # Errors
    ///
    /// Propagates every repository and commit error, including
    /// [`RepositoryError::Duplicate`].
    pub async fn add_task(&self, task: &Task) -> TaskServiceResult<bool> {
        info!("start add_task");
        let outcome = self.stage_and_commit(self.repository.insert(task)).await;
        info!("end add_task");
        log_outcome("add_task", outcome)
    }

    /// Fetches a task by identifier.
    ///
    /// Returns [`Task::not_found`] when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn get_task_by_id(&self, id: TaskId) -> TaskServiceResult<Task> {
        info!(%id, "start get_task_by_id");
        let found = self.repository.get_by_id(id).await.inspect_err(|err| {
            error!(%id, error = %err, "get_task_by_id failed");
        })?;
        info!(%id, found = found.is_some(), "end get_task_by_id");
        Ok(found.unwrap_or_else(Task::not_found))
    }

    /// Replaces a stored task and commits.
    ///
    /// Returns `false` when the task does not exist or the commit affected
    /// no rows.
    ///
    /// # Errors
    ///
    /// Propagates repository and commit errors other than
    /// [`RepositoryError::NotFound`].
    pub async fn update_task(&self, task: &Task) -> TaskServiceResult<bool> {
        info!(id = %task.id(), "start update_task");
        let outcome = match self.stage_and_commit(self.repository.update(task)).await {
            Err(TaskServiceError::Repository(RepositoryError::NotFound(key))) => {
                warn!(id = %key, "update_task target does not exist");
                Ok(false)
            }
            other => other,
        };
        info!(id = %task.id(), "end update_task");
        log_outcome("update_task", outcome)
    }

    /// Returns every stored task; empty when there are none.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn get_all_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        info!("start get_all_tasks");
        let tasks = self.repository.get_all().await.inspect_err(|err| {
            error!(error = %err, "get_all_tasks failed");
        })?;
        info!(count = tasks.len(), "end get_all_tasks");
        Ok(tasks)
    }

    /// Returns every stored task accepted by `predicate`.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn find_tasks(
        &self,
        predicate: impl Fn(&Task) -> bool + Send + Sync + 'static,
    ) -> TaskServiceResult<Vec<Task>> {
        info!("start find_tasks");
        let boxed: EntityPredicate<Task> = Box::new(predicate);
        let tasks = self.repository.find_where(boxed).await?;
        info!(count = tasks.len(), "end find_tasks");
        Ok(tasks)
    }

    /// Deletes a task and commits.
    ///
    /// Returns `false` when the commit affected no rows.
    ///
    /// # Errors
    ///
    /// Propagates every repository and commit error, including
    /// [`RepositoryError::NotFound`] for an unknown identifier.
    pub async fn remove_task(&self, id: TaskId) -> TaskServiceResult<bool> {
        info!(%id, "start remove_task");
        let outcome = self.stage_and_commit(self.repository.delete(id)).await;
        info!(%id, "end remove_task");
        log_outcome("remove_task", outcome)
    }

    async fn stage_and_commit(
        &self,
        staged: impl Future<Output = Result<(), RepositoryError>> + Send,
    ) -> TaskServiceResult<bool> {
        staged.await?;
        let affected = self.unit_of_work.commit().await?;
        Ok(affected > 0)
    }
}

fn log_outcome(operation: &str, outcome: TaskServiceResult<bool>) -> TaskServiceResult<bool> {
    match &outcome {
        Ok(true) => {}
        Ok(false) => info!(operation, "commit changed no rows"),
        Err(err) => error!(operation, error = %err, "task operation failed"),
    }
    outcome
}
