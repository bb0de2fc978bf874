/// Task mutation endpoints
///
/// # Endpoints
///
/// - `PUT /api/tasks/:id` - Partially update a task
/// - `DELETE /api/tasks/:id` - Delete a task

use crate::{
    app::AppState,
    error::{ApiError, ApiJson, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use medix_shared::models::task::{Task, UpdateTask};

/// Partially updates a task
///
/// Only fields present in the body are written; `description` and
/// `categoryId` accept an explicit null to clear the column. An empty
/// body (`{}`) returns the task unchanged.
///
/// # Endpoint
///
/// ```text
/// PUT /api/tasks/:id
/// Content-Type: application/json
///
/// { "completed": true }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: non-numeric task id, non-boolean `completed`
/// - `500 Internal Server Error`: unknown task id or other data-access failure
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(data): ApiJson<UpdateTask>,
) -> ApiResult<Json<Task>> {
    let task_id = super::parse_id(&id, "task id")?;

    let task = Task::update(&state.db, task_id, data)
        .await
        .map_err(ApiError::db("update task"))?;

    Ok(Json(task))
}

/// Deletes a task
///
/// # Endpoint
///
/// ```text
/// DELETE /api/tasks/:id
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: non-numeric task id
/// - `500 Internal Server Error`: unknown task id or other data-access
///   failure (missing ids follow the data-access policy, not 404)
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let task_id = super::parse_id(&id, "task id")?;

    let deleted = Task::delete(&state.db, task_id)
        .await
        .map_err(ApiError::db("delete task"))?;

    if !deleted {
        return Err(ApiError::DataAccess {
            operation: "delete task",
            source: sqlx::Error::RowNotFound,
        });
    }

    Ok(StatusCode::NO_CONTENT)
}
