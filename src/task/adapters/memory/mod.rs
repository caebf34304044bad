//! In-memory adapters for the repository and unit-of-work ports.
//!
//! The committed rows live in an [`InMemoryStore`] that outlives individual
//! sessions, mirroring a database that outlives its connections.

mod repository;
mod session;
mod unit_of_work;

pub use repository::InMemoryRepository;
pub use session::{InMemorySession, InMemoryStore};
pub use unit_of_work::InMemoryUnitOfWork;
