//! Task entity and its validated mutations.

use super::{EntityId, Identifiable, Storable, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// A titled, described unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a validated task awaiting persistence.
    ///
    /// The identifier is left unassigned; storage allocates one on commit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::EmptyDescription`] when either field is blank.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let task = Self::new_unchecked(TaskId::UNASSIGNED, title, description, clock);
        task.ensure_valid()?;
        Ok(task)
    }

    /// Creates a task with an explicit identifier and no validation.
    #[must_use]
    pub fn new_unchecked(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            created_at: data.created_at,
        }
    }

    /// Returns the placeholder used when a requested task does not exist.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            id: TaskId::UNASSIGNED,
            title: String::new(),
            description: String::new(),
            created_at: DateTime::<Utc>::default(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when the task has never been persisted, which includes
    /// the [`Task::not_found`] placeholder.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.id.is_unassigned()
    }

    /// Checks the non-empty title and description rules.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::EmptyDescription`] when either field is blank.
    pub fn ensure_valid(&self) -> Result<(), TaskDomainError> {
        if is_blank(&self.title) {
            return Err(TaskDomainError::EmptyTitle);
        }
        if is_blank(&self.description) {
            return Err(TaskDomainError::EmptyDescription);
        }
        Ok(())
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the new title is blank and
    /// [`TaskDomainError::UnchangedTitle`] when it equals the current one.
    pub fn update_title(&mut self, title: impl Into<String>) -> Result<&mut Self, TaskDomainError> {
        let new_title = title.into();
        if is_blank(&new_title) {
            return Err(TaskDomainError::EmptyTitle);
        }
        if new_title == self.title {
            return Err(TaskDomainError::UnchangedTitle);
        }
        self.title = new_title;
        Ok(self)
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyDescription`] when the new description
    /// is blank and [`TaskDomainError::UnchangedDescription`] when it equals
    /// the current one.
    pub fn update_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<&mut Self, TaskDomainError> {
        let new_description = description.into();
        if is_blank(&new_description) {
            return Err(TaskDomainError::EmptyDescription);
        }
        if new_description == self.description {
            return Err(TaskDomainError::UnchangedDescription);
        }
        self.description = new_description;
        Ok(self)
    }

    /// Copies title and description from `other`.
    ///
    /// The title is applied first. A failing description update leaves the
    /// new title in place.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`Task::update_title`] or
    /// [`Task::update_description`].
    pub fn update(&mut self, other: &Self) -> Result<&mut Self, TaskDomainError> {
        self.update_title(other.title.as_str())?
            .update_description(other.description.as_str())
    }
}

impl Identifiable for Task {
    type Id = TaskId;

    fn id(&self) -> TaskId {
        self.id
    }
}

impl Storable for Task {
    fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }

    fn replacing(self, stored: &Self) -> Self {
        Self {
            created_at: stored.created_at,
            ..self
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
