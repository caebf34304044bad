//! Domain model for task management.
//!
//! The task domain owns the validation rules for titles and descriptions
//! and keeps every infrastructure concern outside of the domain boundary.

mod entity;
mod error;
mod ids;
mod task;

pub use entity::{EntityId, Identifiable, Storable};
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task};
