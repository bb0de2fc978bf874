/// Health check endpoint
///
/// # Endpoint
///
/// ```text
/// GET /api/health
/// ```
///
/// # Response
///
/// ```json
/// { "ok": true }
/// ```

use axum::Json;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always true while the process can serve requests
    pub ok: bool,
}

/// Health check handler
///
/// Reports process liveness with the fixed `{"ok":true}` body; it
/// deliberately does not touch the database.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_is_always_ok() {
        let Json(response) = health_check().await;
        assert!(response.ok);
    }
}
