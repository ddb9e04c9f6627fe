//! Application error taxonomy and HTTP response mapping.
//!
//! Repository and service failures are converted into [`AppError`] at the
//! boundary where they occur; handlers only map errors to responses through
//! [`IntoResponse`]. Raw database errors never reach the caller.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// JSON envelope for every error response.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload: stable `code`, human `message`,
/// structured `details`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application-level error kinds.
///
/// Each variant carries a human-readable message plus structured details
/// that are safe to expose to API callers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request payload failed validation (400).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Missing or invalid credentials (401).
    #[error("{message}")]
    Unauthorized { message: String, details: Value },

    /// Requested resource does not exist (404).
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Storage did not produce the expected record (404).
    ///
    /// Kept at 404 rather than 500: a failed short-link creation has always
    /// surfaced to callers as "New item was not generated properly".
    #[error("{message}")]
    CreationFailed { message: String, details: Value },

    /// Resource exists but has been soft-deleted (410).
    #[error("{message}")]
    Gone { message: String, details: Value },

    /// Storage backend is unreachable or refused the connection (503).
    #[error("{message}")]
    Unavailable { message: String, details: Value },

    /// Unexpected internal failure (500).
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn creation_failed(message: impl Into<String>, details: Value) -> Self {
        Self::CreationFailed {
            message: message.into(),
            details,
        }
    }

    pub fn gone(message: impl Into<String>, details: Value) -> Self {
        Self::Gone {
            message: message.into(),
            details,
        }
    }

    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } | AppError::CreationFailed { .. } => StatusCode::NOT_FOUND,
            AppError::Gone { .. } => StatusCode::GONE,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its wire representation.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::Unauthorized { message, details } => ("unauthorized", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::CreationFailed { message, details } => ("creation_failed", message, details),
            AppError::Gone { message, details } => ("gone", message, details),
            AppError::Unavailable { message, details } => ("backend_unavailable", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        let mut response = (status, Json(body)).into_response();

        // RFC 6750: challenge header on authentication failures.
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

/// Maps an sqlx error to an [`AppError`].
///
/// Connection-state failures become [`AppError::Unavailable`]; everything
/// else is an internal error. Unique-constraint violations are not handled
/// here because their meaning depends on the table; repositories inspect
/// them with [`is_unique_violation`] before falling back to this mapping.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::PoolTimedOut => AppError::unavailable(
            "Database connection timed out",
            json!({ "reason": "pool timeout" }),
        ),
        sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
            AppError::unavailable("Database is unavailable", json!({}))
        }
        sqlx::Error::RowNotFound => AppError::not_found("Record not found", json!({})),
        _ => AppError::internal("Database error", json!({})),
    }
}

/// Returns true if the error is a unique-constraint violation.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::unauthorized("x", json!({})).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::creation_failed("x", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::gone("x", json!({})).status_code(),
            StatusCode::GONE
        );
        assert_eq!(
            AppError::unavailable("x", json!({})).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::internal("x", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_codes() {
        assert_eq!(AppError::gone("g", json!({})).to_error_info().code, "gone");
        assert_eq!(
            AppError::creation_failed("c", json!({})).to_error_info().code,
            "creation_failed"
        );
        assert_eq!(
            AppError::unavailable("u", json!({})).to_error_info().code,
            "backend_unavailable"
        );
    }

    #[test]
    fn test_map_sqlx_error_pool_state() {
        let err = map_sqlx_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Unavailable { .. }));

        let err = map_sqlx_error(sqlx::Error::PoolClosed);
        assert!(matches!(err, AppError::Unavailable { .. }));
    }

    #[test]
    fn test_map_sqlx_error_row_not_found() {
        let err = map_sqlx_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
