//! SQLite unit of work.

use async_trait::async_trait;
use tracing::debug;

use super::session::SqliteSession;
use crate::task::ports::{RepositoryError, RepositoryResult, UnitOfWork};

/// Commits the writes staged on a [`SqliteSession`].
#[derive(Clone)]
pub struct SqliteUnitOfWork {
    session: SqliteSession,
}

impl SqliteUnitOfWork {
    /// Creates a unit of work committing `session`.
    #[must_use]
    pub const fn new(session: SqliteSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl UnitOfWork for SqliteUnitOfWork {
    async fn commit(&self) -> RepositoryResult<usize> {
        let session = self.session.clone();
        let affected = tokio::task::spawn_blocking(move || session.flush_blocking())
            .await
            .map_err(RepositoryError::persistence)??;
        debug!(affected, "sqlite commit finished");
        Ok(affected)
    }

    fn commit_blocking(&self) -> RepositoryResult<usize> {
        self.session.flush_blocking()
    }
}
