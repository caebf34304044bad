//! SQLite repository implementation for task storage.

use super::{
    models::{TaskChanges, TaskInsert, TaskRow},
    schema::tarefas,
    session::SqliteSession,
};
use crate::task::{
    domain::{EntityId, Task, TaskId},
    ports::{EntityPredicate, Repository, RepositoryError, RepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

/// SQLite-backed task repository.
///
/// Writes are staged on the shared [`SqliteSession`] and executed by the
/// matching [`SqliteUnitOfWork`](super::SqliteUnitOfWork).
#[derive(Clone)]
pub struct SqliteTaskRepository {
    session: SqliteSession,
}

impl SqliteTaskRepository {
    /// Creates a repository staging into `session`.
    #[must_use]
    pub const fn new(session: SqliteSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Repository<Task> for SqliteTaskRepository {
    async fn get_all(&self) -> RepositoryResult<Vec<Task>> {
        self.session.run_blocking(load_all).await
    }

    async fn get_by_id(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        self.session
            .run_blocking(move |connection| find_row(connection, id))
            .await
    }

    async fn exists(&self, id: TaskId) -> RepositoryResult<bool> {
        self.session
            .run_blocking(move |connection| {
                diesel::select(diesel::dsl::exists(
                    tarefas::table.filter(tarefas::id.eq(id.into_inner())),
                ))
                .get_result::<bool>(connection)
                .map_err(RepositoryError::persistence)
            })
            .await
    }

    async fn insert(&self, task: &Task) -> RepositoryResult<()> {
        if !task.id().is_unassigned() && self.exists(task.id()).await? {
            return Err(RepositoryError::duplicate(task.id()));
        }

        let row = TaskInsert::from(task);
        self.session.stage(Box::new(move |connection| match row {
            TaskInsert::Generated(new_row) => diesel::insert_into(tarefas::table)
                .values(&new_row)
                .execute(connection),
            TaskInsert::Keyed(keyed_row) => diesel::insert_into(tarefas::table)
                .values(&keyed_row)
                .execute(connection),
        }))
    }

    async fn update(&self, task: &Task) -> RepositoryResult<()> {
        let id = task.id();
        if !self.exists(id).await? {
            return Err(RepositoryError::not_found(id));
        }

        let changes = TaskChanges::from(task);
        self.session.stage(Box::new(move |connection| {
            diesel::update(tarefas::table.find(id.into_inner()))
                .set(&changes)
                .execute(connection)
        }))
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<()> {
        let task = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(id))?;

        let key = task.id().into_inner();
        self.session.stage(Box::new(move |connection| {
            diesel::delete(tarefas::table.find(key)).execute(connection)
        }))
    }

    async fn find_where(&self, predicate: EntityPredicate<Task>) -> RepositoryResult<Vec<Task>> {
        let tasks = self.session.run_blocking(load_all).await?;
        Ok(tasks.into_iter().filter(|task| predicate(task)).collect())
    }
}

fn load_all(connection: &mut SqliteConnection) -> RepositoryResult<Vec<Task>> {
    let rows = tarefas::table
        .order(tarefas::id.asc())
        .select(TaskRow::as_select())
        .load::<TaskRow>(connection)
        .map_err(RepositoryError::persistence)?;
    Ok(rows.into_iter().map(Task::from).collect())
}

fn find_row(connection: &mut SqliteConnection, id: TaskId) -> RepositoryResult<Option<Task>> {
    let row = tarefas::table
        .find(id.into_inner())
        .select(TaskRow::as_select())
        .first::<TaskRow>(connection)
        .optional()
        .map_err(RepositoryError::persistence)?;
    Ok(row.map(Task::from))
}
