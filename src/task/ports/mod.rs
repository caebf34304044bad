//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;
pub mod unit_of_work;

pub use repository::{EntityPredicate, Repository, RepositoryError, RepositoryResult};
pub use unit_of_work::UnitOfWork;
