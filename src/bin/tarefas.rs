//! Tarefas HTTP server.
//!
//! Usage:
//!
//! ```text
//! tarefas [--database-url <path>] [--bind-addr <addr>] [--pool-size <n>] [--in-memory]
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use clap::Parser;
use tarefas::config::Config;
use tarefas::http::create_router;
use tarefas::task::adapters::{memory::InMemoryStore, sqlite::open_pool};
use tarefas::task::services::{InMemoryServiceProvider, SqliteServiceProvider};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let addr = config.validate()?;
    let router = build_router(&config).await?;
    serve(addr, router).await
}

async fn build_router(config: &Config) -> Result<Router, BoxError> {
    if config.in_memory {
        info!("using in-memory task storage");
        return Ok(create_router(Arc::new(InMemoryServiceProvider::new(
            InMemoryStore::new(),
        ))));
    }

    let database_url = config.database_url.clone();
    let pool_size = config.pool_size;
    let pool = tokio::task::spawn_blocking(move || open_pool(&database_url, pool_size)).await??;
    info!(database_url = %config.database_url, pool_size, "using SQLite task storage");
    Ok(create_router(Arc::new(SqliteServiceProvider::new(pool))))
}

async fn serve(addr: SocketAddr, router: Router) -> Result<(), BoxError> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
}
