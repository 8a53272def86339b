//! Request body parsing.
//!
//! Bodies are read as loose JSON and picked apart field by field so that a
//! member of the wrong type counts as absent instead of failing the whole
//! request.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::{HeaderMap, StatusCode};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use serde_json::{Map, Value};
use taskforge_domain::task::{TaskChanges, TaskId, TaskIdError};
use taskforge_workflow::ledger::TITLE_REQUIRED;

use crate::errors::ApiError;

// =============================================================================
// JsonBody
// =============================================================================

/// Request body as a JSON value.
///
/// A request without a JSON content type, or with an empty body, yields an
/// empty object. A JSON body that does not parse is rejected with a
/// validation error carrying the parser message. A body that cannot be read
/// keeps the status of the read failure (413 for an oversized body).
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(request.headers());
        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(body_read_error)?;

        if !is_json || bytes.is_empty() {
            return Ok(Self(Value::Object(Map::new())));
        }
        Ok(Self(serde_json::from_slice(&bytes)?))
    }
}

fn body_read_error(rejection: BytesRejection) -> ApiError {
    let message = rejection.body_text();
    match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::payload_too_large(message),
        status if status.is_server_error() => ApiError::internal(message),
        _ => ApiError::validation(message),
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| essence.trim().to_ascii_lowercase())
        .is_some_and(|essence| essence == "application/json" || essence.ends_with("+json"))
}

// =============================================================================
// TaskIdParam
// =============================================================================

/// The `{id}` path segment parsed with [`TaskId::parse_param`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskIdParam(pub TaskId);

impl<S> FromRequestParts<S> for TaskIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::from(TaskIdError {
                    raw: rejection.body_text(),
                })
            })?;

        Ok(Self(TaskId::parse_param(&raw)?))
    }
}

// =============================================================================
// CreateTaskRequest
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub title: String,
}

impl CreateTaskRequest {
    /// Requires `title` to be a JSON string. Blank titles are rejected by the
    /// ledger.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `title` is missing or not a string.
    pub fn from_body(body: &Value) -> Result<Self, ApiError> {
        match body.get("title") {
            Some(Value::String(title)) => Ok(Self {
                title: title.clone(),
            }),
            _ => Err(ApiError::validation(TITLE_REQUIRED)),
        }
    }
}

// =============================================================================
// UpdateTaskRequest
// =============================================================================

/// Picks `title` when it is a string and `done` when it is a boolean.
#[must_use]
pub fn task_changes_from_body(body: &Value) -> TaskChanges {
    TaskChanges {
        title: body.get("title").and_then(Value::as_str).map(str::to_string),
        done: body.get("done").and_then(Value::as_bool),
    }
}

// =============================================================================
// Tests
// =============================================================================
