//! Pooled SQLite sessions shared by a repository and its unit of work.

use std::sync::{Arc, Mutex, MutexGuard};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::task::ports::{RepositoryError, RepositoryResult};

/// SQLite connection pool type used by task adapters.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Schema applied when a pool is opened.
const CREATE_SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-19-000000_create_tarefas/up.sql");

/// Milliseconds a connection waits on a locked database before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// Write recorded by a repository and executed on commit.
pub(super) type PendingWrite = Box<dyn FnOnce(&mut SqliteConnection) -> QueryResult<usize> + Send>;

#[derive(Debug)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};"))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Opens a connection pool for `database_url` and ensures the schema exists.
///
/// # Errors
///
/// Returns [`RepositoryError::Persistence`] when the pool cannot be built or
/// the schema cannot be applied.
pub fn open_pool(database_url: &str, max_size: u32) -> RepositoryResult<TaskSqlitePool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionPragmas))
        .build(manager)
        .map_err(RepositoryError::persistence)?;

    let mut connection = pool.get().map_err(RepositoryError::persistence)?;
    apply_schema(&mut connection)?;
    debug!(database_url, max_size, "task database ready");
    Ok(pool)
}

/// Creates the task table when it does not exist yet.
///
/// # Errors
///
/// Returns [`RepositoryError::Persistence`] when the DDL fails.
pub fn apply_schema(connection: &mut SqliteConnection) -> RepositoryResult<()> {
    connection
        .batch_execute(CREATE_SCHEMA_SQL)
        .map_err(RepositoryError::persistence)
}

struct SessionState {
    connection: PooledConnection<ConnectionManager<SqliteConnection>>,
    pending: Vec<PendingWrite>,
}

/// One pooled connection plus the writes staged against it.
///
/// Clones share the connection and the staging area. The connection goes
/// back to the pool when the last clone is dropped.
#[derive(Clone)]
pub struct SqliteSession {
    state: Arc<Mutex<SessionState>>,
}

impl SqliteSession {
    /// Checks a connection out of `pool` without blocking the runtime.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when no connection becomes
    /// available.
    pub async fn open(pool: &TaskSqlitePool) -> RepositoryResult<Self> {
        let owned_pool = pool.clone();
        tokio::task::spawn_blocking(move || Self::open_blocking(&owned_pool))
            .await
            .map_err(RepositoryError::persistence)?
    }

    /// Checks a connection out of `pool` on the current thread.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when no connection becomes
    /// available.
    pub fn open_blocking(pool: &TaskSqlitePool) -> RepositoryResult<Self> {
        let connection = pool.get().map_err(RepositoryError::persistence)?;
        Ok(Self {
            state: Arc::new(Mutex::new(SessionState {
                connection,
                pending: Vec::new(),
            })),
        })
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, SessionState>> {
        self.state.lock().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    pub(super) async fn run_blocking<F, T>(&self, f: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> RepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let session = self.clone();
        tokio::task::spawn_blocking(move || {
            let mut state = session.lock()?;
            let connection: &mut SqliteConnection = &mut state.connection;
            f(connection)
        })
        .await
        .map_err(RepositoryError::persistence)?
    }

    pub(super) fn stage(&self, write: PendingWrite) -> RepositoryResult<()> {
        self.lock()?.pending.push(write);
        Ok(())
    }

    /// Runs every staged write in one transaction and returns the affected
    /// row count. A failing write rolls the whole batch back.
    pub(super) fn flush_blocking(&self) -> RepositoryResult<usize> {
        let mut state = self.lock()?;
        let batch = std::mem::take(&mut state.pending);
        if batch.is_empty() {
            return Ok(0);
        }

        let connection: &mut SqliteConnection = &mut state.connection;
        connection
            .transaction::<usize, DieselError, _>(|transaction| {
                let mut affected = 0_usize;
                for write in batch {
                    affected += write(transaction)?;
                }
                Ok(affected)
            })
            .map_err(|err| match err {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info) => {
                    RepositoryError::Duplicate(info.message().to_owned())
                }
                _ => RepositoryError::persistence(err),
            })
    }
}
