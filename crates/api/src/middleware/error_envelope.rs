use axum::Json;
use axum::extract::{OriginalUri, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::config::Environment;
use crate::dto::response::ErrorResponse;
use crate::errors::ApiError;

// =============================================================================
// ErrorRendering
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorRendering {
    pub expose_stack: bool,
}

impl ErrorRendering {
    #[must_use]
    pub const fn for_environment(environment: Environment) -> Self {
        Self {
            expose_stack: environment.exposes_stack(),
        }
    }
}

// =============================================================================
// Middleware
// =============================================================================

/// Re-renders any response produced from an [`ApiError`] as
/// `{ "error": { "message", "stack"? } }` and logs it.
///
/// Client errors are logged at `warn`, server errors at `error`.
pub async fn render_errors(
    State(rendering): State<ErrorRendering>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let mut response = next.run(request).await;
    let Some(error) = response.extensions_mut().remove::<ApiError>() else {
        return response;
    };

    let status = error.status_code();
    if error.is_server_error() {
        tracing::error!(%method, %uri, %status, trace = error.trace(), "{}", error);
    } else {
        tracing::warn!(%method, %uri, %status, "{}", error);
    }

    let stack = rendering
        .expose_stack
        .then(|| error.trace().to_string());
    (status, Json(ErrorResponse::new(error.message(), stack))).into_response()
}

// =============================================================================
// Fallback
// =============================================================================

/// Reports the full request URI, also when reached from a nested router.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::not_found(format!("Not Found - {uri}"))
}

// =============================================================================
// Tests
// =============================================================================
