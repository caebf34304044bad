//! Step definitions for task service behaviour scenarios.

pub mod then;
pub mod when;
pub mod world;
