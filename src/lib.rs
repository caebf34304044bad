//! Tarefas: task management HTTP API.
//!
//! This crate exposes create, read, update and delete operations over a
//! single task entity backed by SQLite.
//!
//! # Architecture
//!
//! Tarefas follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: Concrete implementations of ports (SQLite, in-memory)
//!
//! # Modules
//!
//! - [`task`]: Task entity, repository, unit of work and service
//! - [`http`]: Axum routes mapping the service onto HTTP
//! - [`config`]: Command-line and environment configuration

pub mod config;
pub mod http;
pub mod task;
