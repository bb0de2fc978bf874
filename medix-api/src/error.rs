/// Error handling for the API server
///
/// This module provides the unified error type that maps to HTTP
/// responses. Handlers return `Result<T, ApiError>`, which converts to the
/// wire envelope `{"error": "<message>"}` with the appropriate status.
///
/// Exactly two kinds exist:
///
/// - [`ApiError::Validation`]: malformed or missing input, 400. The
///   message describes what was wrong.
/// - [`ApiError::DataAccess`]: any failure from the persistence layer,
///   500. The underlying error is logged with the operation name and never
///   leaked to the caller; the body carries only a generic
///   "could not <operation>" message.

use axum::{
    extract::rejection::JsonRejection,
    extract::FromRequest,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request input (400)
    #[error("{0}")]
    Validation(String),

    /// Persistence failure, surfaced as a generic 500
    #[error("could not {operation}")]
    DataAccess {
        /// Operation name used in the log line and the generic message
        operation: &'static str,
        source: sqlx::Error,
    },
}

impl ApiError {
    /// Tags a persistence failure with the operation that issued it
    ///
    /// Meant for `map_err` at handler call sites:
    ///
    /// ```ignore
    /// let users = User::list(&state.db).await.map_err(ApiError::db("list users"))?;
    /// ```
    pub fn db(operation: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| ApiError::DataAccess { operation, source }
    }
}

/// Error response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::DataAccess { operation, source } => {
                // The caller only ever sees the generic message
                tracing::error!(operation = %operation, error = %source, "data access failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Convert request-body rejections to API errors
///
/// Malformed JSON, a wrong-typed field, or a missing body all become a 400
/// with the standard envelope instead of axum's plain-text default.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

/// Convert validator failures to API errors
///
/// Field messages are flattened into a single comma-separated string,
/// sorted for deterministic output.
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();
        messages.sort();

        ApiError::Validation(messages.join(", "))
    }
}

/// JSON extractor whose rejection uses the API error envelope
///
/// Drop-in replacement for `axum::Json` on the request side.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
