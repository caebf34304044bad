//! Error types for task domain validation.

use thiserror::Error;

/// Errors returned while constructing or mutating domain tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The new title equals the current one.
    #[error("new task title is equal to the current title")]
    UnchangedTitle,

    /// The new description equals the current one.
    #[error("new task description is equal to the current description")]
    UnchangedDescription,
}
