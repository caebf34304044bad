//! Request payloads for the task endpoints.

use mockable::Clock;
use serde::Deserialize;

use crate::task::domain::{Task, TaskDomainError, TaskId};

/// Task JSON accepted by the create and update endpoints.
///
/// Missing fields default to empty values so they fail domain validation
/// instead of JSON extraction. A supplied `created_at` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskPayload {
    /// Task identifier; zero lets storage assign one.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
}

impl TaskPayload {
    /// Converts the payload into a validated task stamped by `clock`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::EmptyDescription`] when either field is blank.
    pub fn into_task(self, clock: &impl Clock) -> Result<Task, TaskDomainError> {
        let task = Task::new_unchecked(TaskId::new(self.id), self.title, self.description, clock);
        task.ensure_valid()?;
        Ok(task)
    }
}

/// Query string carrying a task identifier.
///
/// A missing `id` reads as zero, which never matches a stored task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IdQuery {
    /// Requested task identifier.
    pub id: i32,
}
