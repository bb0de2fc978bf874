/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Liveness check
/// - `users`: User listing/creation and per-user task endpoints
/// - `tasks`: Task update and deletion
/// - `medix`: Read-only views over the external clinic schema

use crate::error::ApiError;

pub mod health;
pub mod medix;
pub mod tasks;
pub mod users;

/// Parses a numeric path parameter
///
/// Path ids come in as strings so a non-numeric value maps to the 400
/// envelope instead of axum's default rejection.
pub(crate) fn parse_id(raw: &str, what: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::Validation(format!("invalid {}", what)))
}
