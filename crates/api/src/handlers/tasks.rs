use axum::Json;
use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::{HeaderName, StatusCode};
use taskforge_domain::task::Task;
use taskforge_workflow::ports::TaskStore;

use crate::dto::request::{CreateTaskRequest, JsonBody, TaskIdParam, task_changes_from_body};
use crate::dto::response::DataResponse;
use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// GET /api/tasks
// =============================================================================

pub async fn list_tasks<Store>(
    State(state): State<AppState<Store>>,
) -> Result<Json<DataResponse<Vec<Task>>>, ApiError>
where
    Store: TaskStore,
{
    let tasks = state.ledger.list().await?;

    Ok(Json(DataResponse::new(tasks)))
}

// =============================================================================
// POST /api/tasks
// =============================================================================

pub async fn create_task<Store>(
    State(state): State<AppState<Store>>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<DataResponse<Task>>), ApiError>
where
    Store: TaskStore,
{
    let request = CreateTaskRequest::from_body(&body)?;
    let task = state.ledger.create(&request.title).await?;
    let location = format!("/api/tasks/{}", task.id());

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(DataResponse::new(task)),
    ))
}

// =============================================================================
// PUT /api/tasks/{id}
// =============================================================================

pub async fn update_task<Store>(
    State(state): State<AppState<Store>>,
    TaskIdParam(id): TaskIdParam,
    JsonBody(body): JsonBody,
) -> Result<Json<DataResponse<Task>>, ApiError>
where
    Store: TaskStore,
{
    let task = state
        .ledger
        .update(id, task_changes_from_body(&body))
        .await?;

    Ok(Json(DataResponse::new(task)))
}

// =============================================================================
// DELETE /api/tasks/{id}
// =============================================================================

pub async fn delete_task<Store>(
    State(state): State<AppState<Store>>,
    TaskIdParam(id): TaskIdParam,
) -> Result<StatusCode, ApiError>
where
    Store: TaskStore,
{
    state.ledger.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
