//! In-crate tests for task management.
