//! API error types with proper HTTP mapping
//!
//! Every failure this service produces answers with a `{detail}` body whose
//! text is the underlying error's display form. The status code tells caller
//! error (422) apart from provider error (502/503) and our own faults (500).

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream rejected: {0}")]
    UpstreamRejected(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::UpstreamUnavailable(msg) => {
                tracing::warn!(error = %msg, "inference gateway unreachable");
                (StatusCode::SERVICE_UNAVAILABLE, msg)
            }
            ApiError::UpstreamRejected(msg) => {
                tracing::warn!(error = %msg, "inference gateway rejected the call");
                (StatusCode::BAD_GATEWAY, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

// Convenient conversions
impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<arbiter_llm::InferenceError> for ApiError {
    fn from(err: arbiter_llm::InferenceError) -> Self {
        use arbiter_llm::InferenceError;

        let detail = err.to_string();
        match err {
            InferenceError::ConnectionFailed(_) => ApiError::UpstreamUnavailable(detail),
            InferenceError::Rejected(_) => ApiError::UpstreamRejected(detail),
            InferenceError::InvalidResponse(_) => ApiError::UpstreamRejected(detail),
        }
    }
}
