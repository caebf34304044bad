//! SQLite adapters for task persistence.
//!
//! A [`SqliteSession`] checks one connection out of the pool. The
//! repository stages writes on it and the unit of work executes them in a
//! single transaction.

mod models;
mod repository;
mod schema;
mod session;
mod unit_of_work;

pub use repository::SqliteTaskRepository;
pub use session::{SqliteSession, TaskSqlitePool, apply_schema, open_pool};
pub use unit_of_work::SqliteUnitOfWork;
