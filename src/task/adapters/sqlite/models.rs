//! Diesel row models for task persistence.

use super::schema::tarefas;
use crate::task::domain::{EntityId, PersistedTaskData, Task, TaskId};
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tarefas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Creation timestamp in UTC.
    pub created_at: NaiveDateTime,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self::from_persisted(PersistedTaskData {
            id: TaskId::new(row.id),
            title: row.title,
            description: row.description,
            created_at: row.created_at.and_utc(),
        })
    }
}

/// Insert model for tasks whose identifier storage assigns.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tarefas)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Creation timestamp in UTC.
    pub created_at: NaiveDateTime,
}

/// Insert model for tasks carrying an explicit identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tarefas)]
pub struct KeyedTaskRow {
    /// Task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Creation timestamp in UTC.
    pub created_at: NaiveDateTime,
}

/// Insert model selected by whether the task already has an identifier.
#[derive(Debug, Clone)]
pub enum TaskInsert {
    /// Storage allocates the identifier.
    Generated(NewTaskRow),
    /// The identifier is supplied by the caller.
    Keyed(KeyedTaskRow),
}

impl From<&Task> for TaskInsert {
    fn from(task: &Task) -> Self {
        let title = task.title().to_owned();
        let description = task.description().to_owned();
        let created_at = task.created_at().naive_utc();
        if task.id().is_unassigned() {
            Self::Generated(NewTaskRow {
                title,
                description,
                created_at,
            })
        } else {
            Self::Keyed(KeyedTaskRow {
                id: task.id().into_inner(),
                title,
                description,
                created_at,
            })
        }
    }
}

/// Changeset for task updates; the creation timestamp is never rewritten.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tarefas)]
pub struct TaskChanges {
    /// New title.
    pub title: String,
    /// New description.
    pub description: String,
}

impl From<&Task> for TaskChanges {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            description: task.description().to_owned(),
        }
    }
}
