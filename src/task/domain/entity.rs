//! Capabilities shared by every persistable domain entity.
//!
//! Repositories are written against these traits rather than a concrete
//! entity type, so a storage backend can be swapped without the service
//! layer noticing.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Primary key of a persistable entity.
pub trait EntityId: Copy + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static {
    /// Key carried by entities that storage has not assigned yet.
    const UNASSIGNED: Self;

    /// Returns the next key in auto-increment order.
    #[must_use]
    fn successor(self) -> Self;

    /// Returns `true` when this key is [`Self::UNASSIGNED`].
    fn is_unassigned(self) -> bool {
        self == Self::UNASSIGNED
    }
}

/// Entity exposing an explicit primary key.
pub trait Identifiable {
    /// Primary key type.
    type Id: EntityId;

    /// Returns the primary key.
    fn id(&self) -> Self::Id;
}

/// Entity that a repository may stage and persist.
pub trait Storable: Identifiable + Clone + Send + Sync + 'static {
    /// Returns a copy of the entity carrying a storage-assigned key.
    #[must_use]
    fn with_id(self, id: Self::Id) -> Self;

    /// Returns the row to store when `self` replaces `stored`.
    ///
    /// Fields owned by storage, such as creation timestamps, are taken from
    /// `stored`. The default keeps `self` unchanged.
    #[must_use]
    fn replacing(self, _stored: &Self) -> Self {
        self
    }
}
