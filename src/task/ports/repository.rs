//! Generic repository port for entity persistence and lookup.

use crate::task::domain::{Identifiable, Storable};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository and unit-of-work operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Predicate evaluated against stored entities by [`Repository::find_where`].
pub type EntityPredicate<E> = Box<dyn Fn(&E) -> bool + Send + Sync>;

/// Persistence gateway for one entity kind.
///
/// Mutating operations only stage changes. Nothing reaches durable storage
/// until the [`UnitOfWork`](super::UnitOfWork) sharing the same session is
/// committed. Reads observe committed state.
#[async_trait]
pub trait Repository<E: Storable>: Send + Sync {
    /// Returns every stored entity in storage order.
    async fn get_all(&self) -> RepositoryResult<Vec<E>>;

    /// Finds an entity by primary key.
    ///
    /// Returns `None` when the entity does not exist.
    async fn get_by_id(&self, id: <E as Identifiable>::Id) -> RepositoryResult<Option<E>>;

    /// Reports whether an entity with the given key is stored.
    async fn exists(&self, id: <E as Identifiable>::Id) -> RepositoryResult<bool>;

    /// Stages a new entity.
    ///
    /// An unassigned key is allocated by storage when the insert is flushed.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Duplicate`] when the key already exists.
    async fn insert(&self, entity: &E) -> RepositoryResult<()>;

    /// Stages the replacement of an existing entity.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when the key does not exist.
    async fn update(&self, entity: &E) -> RepositoryResult<()>;

    /// Stages the removal of an entity after looking it up.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when the key does not exist.
    async fn delete(&self, id: <E as Identifiable>::Id) -> RepositoryResult<()>;

    /// Returns every stored entity accepted by `predicate`.
    async fn find_where(&self, predicate: EntityPredicate<E>) -> RepositoryResult<Vec<E>>;
}

/// Errors returned by repository and unit-of-work implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// An entity with the same key already exists.
    #[error("entity already exists: {0}")]
    Duplicate(String),

    /// No entity with the key exists.
    #[error("entity does not exist: {0}")]
    NotFound(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Builds a [`RepositoryError::Duplicate`] for the given key.
    pub fn duplicate(id: impl std::fmt::Display) -> Self {
        Self::Duplicate(id.to_string())
    }

    /// Builds a [`RepositoryError::NotFound`] for the given key.
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(id.to_string())
    }
}
