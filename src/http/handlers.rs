//! Task endpoint handlers.
//!
//! Service outcomes map to status codes: `false` becomes 400 with a `false`
//! body, a missing task becomes 404 and any error becomes 500 carrying the
//! error message.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

use super::payload::{IdQuery, TaskPayload};
use crate::task::{
    domain::TaskId,
    services::{TaskServiceError, TaskServiceProvider},
};

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Lists every task; 404 when there are none.
pub async fn get_all_tarefas<P: TaskServiceProvider>(State(provider): State<Arc<P>>) -> Response {
    let result = match provider.task_service().await {
        Ok(service) => service.get_all_tasks().await,
        Err(err) => Err(err),
    };

    match result {
        Ok(tasks) if tasks.is_empty() => {
            info!("no tasks found");
            StatusCode::NOT_FOUND.into_response()
        }
        Ok(tasks) => {
            info!(count = tasks.len(), "tasks found");
            Json(tasks).into_response()
        }
        Err(err) => internal_error("get_all_tarefas", &err),
    }
}

/// Fetches one task; 404 when the id matches nothing.
pub async fn get_tarefa_por_id<P: TaskServiceProvider>(
    State(provider): State<Arc<P>>,
    Query(query): Query<IdQuery>,
) -> Response {
    let id = TaskId::new(query.id);
    let result = match provider.task_service().await {
        Ok(service) => service.get_task_by_id(id).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(task) if task.is_not_found() => {
            info!(%id, "task not found");
            StatusCode::NOT_FOUND.into_response()
        }
        Ok(task) => Json(task).into_response(),
        Err(err) => internal_error("get_tarefa_por_id", &err),
    }
}

/// Creates a task; 201 with `true` on success.
///
/// A payload with a blank title or description is answered with 400 and
/// `false` without reaching the service, as is a commit that changed no
/// rows.
pub async fn adicionar_tarefa<P: TaskServiceProvider>(
    State(provider): State<Arc<P>>,
    Json(payload): Json<TaskPayload>,
) -> Response {
    let task = match payload.into_task(provider.clock()) {
        Ok(task) => task,
        Err(err) => {
            warn!(error = %err, "rejected task payload");
            return rejected();
        }
    };

    let result = match provider.task_service().await {
        Ok(service) => service.add_task(&task).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(true) => (StatusCode::CREATED, Json(true)).into_response(),
        Ok(false) => {
            error!("task was not added");
            rejected()
        }
        Err(err) => internal_error("adicionar_tarefa", &err),
    }
}

/// Replaces a task's title and description; 200 with `true` on success.
///
/// A blank payload is answered with 400 and `false` without reaching the
/// service. An unknown id or a commit that changed no rows also yields 400
/// and `false`. The stored creation time is kept.
pub async fn alterar_tarefa<P: TaskServiceProvider>(
    State(provider): State<Arc<P>>,
    Json(payload): Json<TaskPayload>,
) -> Response {
    let task = match payload.into_task(provider.clock()) {
        Ok(task) => task,
        Err(err) => {
            warn!(error = %err, "rejected task payload");
            return rejected();
        }
    };

    let result = match provider.task_service().await {
        Ok(service) => service.update_task(&task).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(true) => (StatusCode::OK, Json(true)).into_response(),
        Ok(false) => {
            error!(id = %task.id(), "task was not updated");
            rejected()
        }
        Err(err) => internal_error("alterar_tarefa", &err),
    }
}

/// Removes a task; 204 on success.
pub async fn remover_tarefa<P: TaskServiceProvider>(
    State(provider): State<Arc<P>>,
    Query(query): Query<IdQuery>,
) -> Response {
    let id = TaskId::new(query.id);
    let result = match provider.task_service().await {
        Ok(service) => service.remove_task(id).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => {
            error!(%id, "task was not removed");
            rejected()
        }
        Err(err) => internal_error("remover_tarefa", &err),
    }
}

fn rejected() -> Response {
    (StatusCode::BAD_REQUEST, Json(false)).into_response()
}

fn internal_error(handler: &str, err: &TaskServiceError) -> Response {
    error!(handler, error = %err, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
}
