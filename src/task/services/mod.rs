//! Application services for task management.

mod provider;
mod task_service;

pub use provider::{InMemoryServiceProvider, SqliteServiceProvider, TaskServiceProvider};
pub use task_service::{TaskService, TaskServiceError, TaskServiceResult};
