//! Committed store and per-session staging area.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::task::{
    domain::{EntityId, Identifiable, Storable},
    ports::{RepositoryError, RepositoryResult},
};

type Rows<E> = BTreeMap<<E as Identifiable>::Id, E>;

/// Committed rows plus the auto-increment high-water mark.
///
/// Keys are never reused, even after the row holding the highest key is
/// deleted.
struct Table<E: Storable> {
    rows: Rows<E>,
    last_id: <E as Identifiable>::Id,
}

impl<E: Storable> Clone for Table<E> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            last_id: self.last_id,
        }
    }
}

impl<E: Storable> Table<E> {
    fn from_rows(rows: Rows<E>) -> Self {
        let last_id = rows
            .keys()
            .next_back()
            .copied()
            .unwrap_or(<E::Id as EntityId>::UNASSIGNED);
        Self { rows, last_id }
    }

    fn next_key(&mut self) -> <E as Identifiable>::Id {
        self.last_id = self.last_id.successor();
        self.last_id
    }

    fn apply(&mut self, change: PendingChange<E>) -> RepositoryResult<usize> {
        match change {
            PendingChange::Insert(entity) => {
                let staged = if entity.id().is_unassigned() {
                    let key = self.next_key();
                    entity.with_id(key)
                } else {
                    entity
                };
                let key = staged.id();
                if self.rows.contains_key(&key) {
                    return Err(RepositoryError::duplicate(key));
                }
                self.last_id = self.last_id.max(key);
                self.rows.insert(key, staged);
                Ok(1)
            }
            PendingChange::Update(entity) => match self.rows.get_mut(&entity.id()) {
                Some(row) => {
                    *row = entity.replacing(row);
                    Ok(1)
                }
                None => Ok(0),
            },
            PendingChange::Delete(key) => Ok(usize::from(self.rows.remove(&key).is_some())),
        }
    }
}

/// Thread-safe committed row storage shared by every session.
pub struct InMemoryStore<E: Storable> {
    table: Arc<RwLock<Table<E>>>,
}

impl<E: Storable> InMemoryStore<E> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `entities`, keyed by their ids.
    #[must_use]
    pub fn seeded(entities: impl IntoIterator<Item = E>) -> Self {
        let rows = entities
            .into_iter()
            .map(|entity| (entity.id(), entity))
            .collect();
        Self {
            table: Arc::new(RwLock::new(Table::from_rows(rows))),
        }
    }

    /// Opens a new session with an empty staging area.
    #[must_use]
    pub fn session(&self) -> InMemorySession<E> {
        InMemorySession {
            store: self.clone(),
            pending: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(super) fn read<T>(&self, f: impl FnOnce(&Rows<E>) -> T) -> RepositoryResult<T> {
        let table = self.table.read().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(f(&table.rows))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Table<E>) -> T) -> RepositoryResult<T> {
        let mut table = self.table.write().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(f(&mut table))
    }
}

impl<E: Storable> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table::from_rows(BTreeMap::new()))),
        }
    }
}

impl<E: Storable> Clone for InMemoryStore<E> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

/// Change recorded by a repository and applied on commit.
pub(super) enum PendingChange<E: Storable> {
    Insert(E),
    Update(E),
    Delete(<E as Identifiable>::Id),
}

/// One unit of work's view of an [`InMemoryStore`].
///
/// Repositories and the unit of work built from clones of the same session
/// share its staging area.
pub struct InMemorySession<E: Storable> {
    store: InMemoryStore<E>,
    pending: Arc<Mutex<Vec<PendingChange<E>>>>,
}

impl<E: Storable> Clone for InMemorySession<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<E: Storable> InMemorySession<E> {
    pub(super) const fn store(&self) -> &InMemoryStore<E> {
        &self.store
    }

    pub(super) fn stage(&self, change: PendingChange<E>) -> RepositoryResult<()> {
        let mut pending = self.pending.lock().map_err(|err| {
            RepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        pending.push(change);
        Ok(())
    }

    /// Applies every staged change atomically and returns the affected count.
    ///
    /// On error the committed rows are left untouched and the batch is
    /// dropped.
    pub(super) fn flush(&self) -> RepositoryResult<usize> {
        let batch: Vec<PendingChange<E>> = {
            let mut pending = self.pending.lock().map_err(|err| {
                RepositoryError::persistence(std::io::Error::other(err.to_string()))
            })?;
            pending.drain(..).collect()
        };
        if batch.is_empty() {
            return Ok(0);
        }

        self.store.write(|table| -> RepositoryResult<usize> {
            let mut next = table.clone();
            let mut affected = 0_usize;
            for change in batch {
                affected += next.apply(change)?;
            }
            *table = next;
            Ok(affected)
        })?
    }
}
