/// User endpoints and per-user task endpoints
///
/// # Endpoints
///
/// - `GET /api/users` - List users (id ascending)
/// - `POST /api/users` - Create user
/// - `GET /api/users/:id/tasks` - List a user's tasks (id descending)
/// - `POST /api/users/:id/tasks` - Create a task for a user

use crate::{
    app::AppState,
    error::{ApiError, ApiJson, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use medix_shared::models::{
    category::Category,
    task::{CreateTask, Task},
    user::{CreateUser, User},
};
use serde::Deserialize;
use validator::Validate;

/// Create user request
///
/// Both fields are required and non-empty; they are optional here so that
/// an absent field produces the validation envelope rather than a body
/// rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,

    /// Email address (unique; duplicates surface as a data-access failure)
    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email must not be empty")
    )]
    pub email: Option<String>,
}

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title
    #[validate(
        required(message = "title is required"),
        length(min = 1, message = "title must not be empty")
    )]
    pub title: Option<String>,

    /// Optional description
    pub description: Option<String>,
}

/// Lists all users ordered by id ascending
///
/// # Endpoint
///
/// ```text
/// GET /api/users
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: data-access failure
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db)
        .await
        .map_err(ApiError::db("list users"))?;

    Ok(Json(users))
}

/// Creates a new user
///
/// # Endpoint
///
/// ```text
/// POST /api/users
/// Content-Type: application/json
///
/// { "name": "Ana", "email": "ana@x.com" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing or empty `name`/`email`
/// - `500 Internal Server Error`: duplicate email or other data-access failure
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    req.validate()?;

    let user = User::create(
        &state.db,
        CreateUser {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
        },
    )
    .await
    .map_err(ApiError::db("create user"))?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Lists a user's tasks ordered by id descending (newest first)
///
/// # Endpoint
///
/// ```text
/// GET /api/users/:id/tasks
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: non-numeric user id
/// - `500 Internal Server Error`: data-access failure
pub async fn list_user_tasks(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Task>>> {
    let user_id = super::parse_id(&id, "user id")?;

    let tasks = Task::list_by_user(&state.db, user_id)
        .await
        .map_err(ApiError::db("list tasks"))?;

    Ok(Json(tasks))
}

/// Creates a task owned by a user
///
/// The "General" category is attached when the lazy upsert succeeds; a
/// failure there is logged and the task is created without a category.
/// Intentional degraded-mode behavior, not a fatal dependency.
///
/// # Endpoint
///
/// ```text
/// POST /api/users/:id/tasks
/// Content-Type: application/json
///
/// { "title": "Buy milk", "description": "2 liters" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: non-numeric user id, missing or empty `title`
/// - `500 Internal Server Error`: data-access failure
pub async fn create_user_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let user_id = super::parse_id(&id, "user id")?;
    req.validate()?;

    // Best-effort default category: a failure must not block task creation
    let category_id = match Category::ensure_default(&state.db).await {
        Ok(category) => Some(category.id),
        Err(err) => {
            tracing::warn!(error = %err, "could not ensure default category, creating task without one");
            None
        }
    };

    let task = Task::create(
        &state.db,
        CreateTask {
            title: req.title.unwrap_or_default(),
            description: req.description,
            user_id,
            category_id,
        },
    )
    .await
    .map_err(ApiError::db("create task"))?;

    Ok((StatusCode::CREATED, Json(task)))
}
