/// Application state and router builder
///
/// This module defines the shared application state and provides a
/// function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use medix_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = medix_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{get, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. The pool
/// is internally reference-counted, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                          # Plain-text endpoint banner
/// └── /api/
///     ├── GET    /health              # Liveness check
///     ├── GET    /users               # List users
///     ├── POST   /users               # Create user
///     ├── GET    /users/:id/tasks     # List a user's tasks
///     ├── POST   /users/:id/tasks     # Create a task for a user
///     ├── PUT    /tasks/:id           # Partially update a task
///     ├── DELETE /tasks/:id           # Delete a task
///     └── /medix/                     # Read-only clinic views
///         ├── GET /patients
///         ├── GET /doctors
///         └── GET /appointments
/// ```
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (permissive; the API serves browser frontends directly)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let medix_routes = Router::new()
        .route("/patients", get(routes::medix::list_patients))
        .route("/doctors", get(routes::medix::list_doctors))
        .route("/appointments", get(routes::medix::list_appointments));

    let api_routes = Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route(
            "/users/:id/tasks",
            get(routes::users::list_user_tasks).post(routes::users::create_user_task),
        )
        .route(
            "/tasks/:id",
            put(routes::tasks::update_task).delete(routes::tasks::delete_task),
        )
        .nest("/medix", medix_routes);

    Router::new()
        .route("/", get(root_info))
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Root banner describing the available endpoints
async fn root_info() -> &'static str {
    "Medix API is running.\n\
     Use /api/health for status, or /api/users, /api/tasks and /api/medix/* for endpoints.\n"
}
