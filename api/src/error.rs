use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured error response. Every error carries a machine-readable code,
/// a human-readable message, and a request id for tracing.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    /// Machine-readable error code (e.g. "validation_failed", "upstream_error")
    pub error: String,
    /// Human-readable description of what went wrong
    pub message: String,
    /// Which field caused the error (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Request ID for tracing and debugging
    pub request_id: String,
}

/// Error codes used across the API
pub mod codes {
    pub const VALIDATION_FAILED: &str = "validation_failed";
    pub const TRANSCRIBER_UNAVAILABLE: &str = "transcriber_unavailable";
    pub const UPSTREAM_ERROR: &str = "upstream_error";
    pub const UPSTREAM_TIMEOUT: &str = "upstream_timeout";
    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// Internal error type that converts to structured API responses
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Validation error (400)
    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
    },
    /// Transcription requested but no upstream is configured (503)
    #[error("transcription is not configured")]
    TranscriberUnavailable,
    /// Upstream transcription service rejected the request (502)
    #[error("upstream transcription error: {message}")]
    Upstream { message: String },
    /// Upstream transcription service timed out (504)
    #[error("upstream transcription timed out")]
    UpstreamTimeout,
    /// Internal error (500)
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::now_v7().to_string();

        let (status, api_error) = match self {
            AppError::Validation { message, field } => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    error: codes::VALIDATION_FAILED.to_string(),
                    message,
                    field,
                    request_id,
                },
            ),
            AppError::TranscriberUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError {
                    error: codes::TRANSCRIBER_UNAVAILABLE.to_string(),
                    message: "Transcription is not configured on this server".to_string(),
                    field: None,
                    request_id,
                },
            ),
            AppError::Upstream { message } => {
                tracing::error!("Upstream transcription error: {}", message);
                (
                    StatusCode::BAD_GATEWAY,
                    ApiError {
                        error: codes::UPSTREAM_ERROR.to_string(),
                        message,
                        field: None,
                        request_id,
                    },
                )
            }
            AppError::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                ApiError {
                    error: codes::UPSTREAM_TIMEOUT.to_string(),
                    message: "Transcription timed out".to_string(),
                    field: None,
                    request_id,
                },
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError {
                        error: codes::INTERNAL_ERROR.to_string(),
                        message: "An internal error occurred".to_string(),
                        field: None,
                        request_id,
                    },
                )
            }
        };

        (status, Json(api_error)).into_response()
    }
}
