/// Common test utilities for integration tests
///
/// Builds the real router over a lazily-connected pool, so the contract
/// tests (validation failures, health, banner) run with no database at
/// all. Suites that need a live store connect for real and are marked
/// `#[ignore]`; they expect `DATABASE_URL` to point at a migrated
/// postgres.

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use medix_api::app::{build_router, AppState};
use medix_api::config::{ApiConfig, Config, DatabaseConfig};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Test context containing the router and its pool
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
}

fn database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgresql://localhost:5432/medix_test".to_string())
}

fn build(db: PgPool, url: String) -> TestContext {
    let config = Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url,
            max_connections: 2,
        },
    };

    let state = AppState::new(db.clone(), config);
    let app = build_router(state);

    TestContext { db, app }
}

impl TestContext {
    /// Creates a context over a lazy pool
    ///
    /// No connection is attempted until a handler actually queries, which
    /// the contract tests never do.
    pub fn new() -> Self {
        let url = database_url();
        let db = PgPoolOptions::new()
            .max_connections(2)
            .connect_lazy(&url)
            .expect("database url must parse");

        build(db, url)
    }

    /// Creates a context connected to a real database
    ///
    /// Used by the `#[ignore]` suites only.
    pub async fn connected() -> anyhow::Result<Self> {
        let url = database_url();
        let db = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await?;

        Ok(build(db, url))
    }
}

/// Builds a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Builds a bodyless request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collects a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collects a response body as a string
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
