use std::error::Error as StdError;
use std::fmt::Write as _;
use std::panic::Location;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::dto::response::ErrorResponse;

// =============================================================================
// ApiError
// =============================================================================

/// Error returned by handlers and extractors.
///
/// Carries the client-facing message and a diagnostic `trace`. The trace is
/// only rendered by [`render_errors`](crate::middleware::render_errors) and
/// only outside production.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{message}")]
    NotFound { message: String, trace: String },

    #[error("{message}")]
    ValidationError { message: String, trace: String },

    #[error("{message}")]
    PayloadTooLarge { message: String, trace: String },

    #[error("{message}")]
    InternalError { message: String, trace: String },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl ApiError {
    #[must_use]
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        let message = message.into();
        let trace = caller_trace("NotFound", &message);
        Self::NotFound { message, trace }
    }

    #[must_use]
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        let trace = caller_trace("ValidationError", &message);
        Self::ValidationError { message, trace }
    }

    #[must_use]
    #[track_caller]
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        let message = message.into();
        let trace = caller_trace("PayloadTooLarge", &message);
        Self::PayloadTooLarge { message, trace }
    }

    #[must_use]
    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        let trace = caller_trace("InternalError", &message);
        Self::InternalError { message, trace }
    }
}

#[track_caller]
fn caller_trace(kind: &str, message: &str) -> String {
    format!("{kind}: {message}\n    at {}", Location::caller())
}

/// Renders `error` followed by its `source()` chain, one cause per line.
pub fn error_trace(error: &(dyn StdError + 'static)) -> String {
    let mut trace = format!("{error:?}");
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = write!(trace, "\n    caused by: {cause:?}");
        source = cause.source();
    }
    trace
}

// =============================================================================
// Query Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message, .. }
            | Self::ValidationError { message, .. }
            | Self::PayloadTooLarge { message, .. }
            | Self::InternalError { message, .. } => message,
        }
    }

    #[must_use]
    pub fn trace(&self) -> &str {
        match self {
            Self::NotFound { trace, .. }
            | Self::ValidationError { trace, .. }
            | Self::PayloadTooLarge { trace, .. }
            | Self::InternalError { trace, .. } => trace,
        }
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

/// Renders the envelope without `stack` and keeps the error in the response
/// extensions for [`render_errors`](crate::middleware::render_errors).
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.message(), None);
        let mut response = (self.status_code(), Json(body)).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

// =============================================================================
// Tests
// =============================================================================
