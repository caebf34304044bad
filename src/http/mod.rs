//! HTTP surface for the task API.
//!
//! Provides endpoints for:
//! - Task listing (`/api/tarefas/v1/GetAllTarefas`)
//! - Task lookup (`/api/tarefas/v1/GetTarefaPorId?id=`)
//! - Task creation (`/api/tarefas/v1/AdicionarTarefa`)
//! - Task replacement (`/api/tarefas/v1/AlterarTarefa`)
//! - Task removal (`/api/tarefas/v1/RemoverTarefa?id=`)
//! - Health check (`/health`)

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::task::services::TaskServiceProvider;

pub mod handlers;
pub mod payload;

/// Route prefix shared by every task endpoint.
pub const API_PREFIX: &str = "/api/tarefas/v1";

/// Create the HTTP router.
pub fn create_router<P: TaskServiceProvider>(provider: Arc<P>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/GetAllTarefas", get(handlers::get_all_tarefas::<P>))
        .route("/GetTarefaPorId", get(handlers::get_tarefa_por_id::<P>))
        .route("/AdicionarTarefa", post(handlers::adicionar_tarefa::<P>))
        .route("/AlterarTarefa", put(handlers::alterar_tarefa::<P>))
        .route("/RemoverTarefa", delete(handlers::remover_tarefa::<P>));

    Router::new()
        .nest(API_PREFIX, api)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(provider)
}
