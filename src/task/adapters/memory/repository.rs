//! Generic in-memory repository.

use async_trait::async_trait;

use super::session::{InMemorySession, PendingChange};
use crate::task::{
    domain::{Identifiable, Storable},
    ports::{EntityPredicate, Repository, RepositoryError, RepositoryResult},
};

/// Repository over an [`InMemorySession`] for any storable entity.
pub struct InMemoryRepository<E: Storable> {
    session: InMemorySession<E>,
}

impl<E: Storable> InMemoryRepository<E> {
    /// Creates a repository staging into `session`.
    #[must_use]
    pub const fn new(session: InMemorySession<E>) -> Self {
        Self { session }
    }
}

impl<E: Storable> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
        }
    }
}

#[async_trait]
impl<E: Storable> Repository<E> for InMemoryRepository<E> {
    async fn get_all(&self) -> RepositoryResult<Vec<E>> {
        self.session
            .store()
            .read(|rows| rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: <E as Identifiable>::Id) -> RepositoryResult<Option<E>> {
        self.session.store().read(|rows| rows.get(&id).cloned())
    }

    async fn exists(&self, id: <E as Identifiable>::Id) -> RepositoryResult<bool> {
        self.session.store().read(|rows| rows.contains_key(&id))
    }

    async fn insert(&self, entity: &E) -> RepositoryResult<()> {
        if self.exists(entity.id()).await? {
            return Err(RepositoryError::duplicate(entity.id()));
        }
        self.session.stage(PendingChange::Insert(entity.clone()))
    }

    async fn update(&self, entity: &E) -> RepositoryResult<()> {
        if !self.exists(entity.id()).await? {
            return Err(RepositoryError::not_found(entity.id()));
        }
        self.session.stage(PendingChange::Update(entity.clone()))
    }

    async fn delete(&self, id: <E as Identifiable>::Id) -> RepositoryResult<()> {
        let entity = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(id))?;
        self.session.stage(PendingChange::Delete(entity.id()))
    }

    async fn find_where(&self, predicate: EntityPredicate<E>) -> RepositoryResult<Vec<E>> {
        self.session.store().read(|rows| {
            rows.values()
                .filter(|entity| predicate(*entity))
                .cloned()
                .collect()
        })
    }
}
