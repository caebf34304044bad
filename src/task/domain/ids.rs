//! Identifier types for the task domain.

use super::entity::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned identifier for a task record.
///
/// Zero is reserved: it marks a task that has not been persisted yet and
/// doubles as the "not found" sentinel at the service boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i32);

impl TaskId {
    /// Creates a task identifier from a raw storage key.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the wrapped storage key.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl From<i32> for TaskId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl EntityId for TaskId {
    /// Zero marks unpersisted and sentinel tasks.
    const UNASSIGNED: Self = Self(0);

    fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}
