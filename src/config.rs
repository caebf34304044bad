//! Server configuration.
//!
//! Every option can be passed on the command line or through a
//! `TAREFAS_*` environment variable.

use std::net::SocketAddr;

use clap::Parser;
use thiserror::Error;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tarefas", version, about = "Task management HTTP API")]
pub struct Config {
    /// SQLite database location (file path or `file:` URI).
    #[arg(long, env = "TAREFAS_DATABASE_URL", default_value = "tarefas.db")]
    pub database_url: String,

    /// HTTP bind address.
    #[arg(long, env = "TAREFAS_BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind_addr: String,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TAREFAS_POOL_SIZE", default_value_t = 4)]
    pub pool_size: u32,

    /// Keep tasks in memory instead of SQLite.
    #[arg(long, env = "TAREFAS_IN_MEMORY")]
    pub in_memory: bool,

    /// Tracing filter directive used when `RUST_LOG` is unset.
    #[arg(long, env = "TAREFAS_LOG", default_value = "info")]
    pub log_level: String,
}

/// Errors raised while validating configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The bind address does not parse as `host:port`.
    #[error("invalid bind address '{0}'")]
    InvalidBindAddr(String),

    /// The pool must hold at least one connection.
    #[error("pool size must be at least 1")]
    EmptyPool,

    /// The database location is blank.
    #[error("database url must not be empty")]
    EmptyDatabaseUrl,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "tarefas.db".to_owned(),
            bind_addr: "127.0.0.1:8080".to_owned(),
            pool_size: 4,
            in_memory: false,
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Checks option values and returns the parsed bind address.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid option.
    pub fn validate(&self) -> Result<SocketAddr, ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if !self.in_memory && self.database_url.trim().is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }
        self.bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(self.bind_addr.clone()))
    }
}
