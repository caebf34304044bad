//! Unit-of-work port wrapping the commit boundary.

use super::RepositoryResult;
use async_trait::async_trait;

/// Flushes the changes staged by repositories sharing a session.
///
/// The affected-row count is the success signal: zero means the commit had
/// no effect, which is not an error.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Flushes staged changes and returns the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`](super::RepositoryError::Persistence)
    /// when storage rejects the batch; the batch is discarded.
    async fn commit(&self) -> RepositoryResult<usize>;

    /// Blocking equivalent of [`UnitOfWork::commit`].
    ///
    /// Must not be called from inside an async runtime worker thread.
    ///
    /// # Errors
    ///
    /// Same as [`UnitOfWork::commit`].
    fn commit_blocking(&self) -> RepositoryResult<usize>;
}
