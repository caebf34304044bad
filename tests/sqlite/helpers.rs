//! Shared fixtures for SQLite integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::{Clock, DefaultClock};
use rstest::fixture;
use tarefas::task::{
    adapters::sqlite::{SqliteSession, SqliteTaskRepository, SqliteUnitOfWork, TaskSqlitePool, open_pool},
    domain::{Task, TaskId},
    ports::{Repository, UnitOfWork},
};
use tempfile::TempDir;

/// Number of tasks written by [`seeded_database`].
pub const SEEDED_TASKS: usize = 5;

/// Temporary database file plus the pool opened on it.
///
/// The directory is removed when the value is dropped.
pub struct TestDatabase {
    /// Directory holding the database file.
    pub dir: TempDir,
    /// Pool opened on the database.
    pub pool: TaskSqlitePool,
}

impl TestDatabase {
    /// Opens a session and returns the repository and unit of work bound to
    /// it.
    ///
    /// # Errors
    ///
    /// Returns an error if no pooled connection is available.
    pub async fn open(&self) -> Result<(SqliteTaskRepository, SqliteUnitOfWork), eyre::Report> {
        let session = SqliteSession::open(&self.pool).await?;
        Ok((
            SqliteTaskRepository::new(session.clone()),
            SqliteUnitOfWork::new(session),
        ))
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a clock frozen at midnight on the first of January of `year`.
#[must_use]
pub fn clock_at_year(year: i32) -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single().unwrap_or_default())
}

/// Builds the task seeded under `id`.
#[must_use]
pub fn seeded_task(id: i32) -> Task {
    Task::new_unchecked(TaskId::new(id), format!("teste-{id}"), "-", &DefaultClock)
}

fn create_database() -> Result<TestDatabase, eyre::Report> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("tarefas.test.db");
    let url = path
        .to_str()
        .ok_or_else(|| eyre::eyre!("temporary path is not valid UTF-8"))?
        .to_owned();
    let pool = open_pool(&url, 4)?;
    Ok(TestDatabase { dir, pool })
}

/// Provides an empty database with the schema applied.
///
/// # Errors
///
/// Returns an error if the temporary database cannot be created.
#[fixture]
pub fn empty_database() -> Result<TestDatabase, eyre::Report> {
    create_database()
}

/// Provides a database holding tasks `1..=5` titled `teste-N`.
///
/// # Errors
///
/// Returns an error if the database cannot be created or seeded.
#[fixture]
pub async fn seeded_database() -> Result<TestDatabase, eyre::Report> {
    let database = create_database()?;
    let (repository, unit_of_work) = database.open().await?;
    for id in 1..=5 {
        repository.insert(&seeded_task(id)).await?;
    }
    let affected = unit_of_work.commit().await?;
    eyre::ensure!(affected == SEEDED_TASKS, "seeded {affected} rows");
    Ok(database)
}
