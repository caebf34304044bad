//! In-memory unit of work.

use async_trait::async_trait;

use super::session::InMemorySession;
use crate::task::{
    domain::Storable,
    ports::{RepositoryResult, UnitOfWork},
};

/// Commits the changes staged in an [`InMemorySession`].
pub struct InMemoryUnitOfWork<E: Storable> {
    session: InMemorySession<E>,
}

impl<E: Storable> InMemoryUnitOfWork<E> {
    /// Creates a unit of work committing `session`.
    #[must_use]
    pub const fn new(session: InMemorySession<E>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl<E: Storable> UnitOfWork for InMemoryUnitOfWork<E> {
    async fn commit(&self) -> RepositoryResult<usize> {
        self.session.flush()
    }

    fn commit_blocking(&self) -> RepositoryResult<usize> {
        self.session.flush()
    }
}
