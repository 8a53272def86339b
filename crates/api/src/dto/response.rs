use serde::{Deserialize, Serialize};

// =============================================================================
// Data Envelope
// =============================================================================

/// Success envelope: `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    #[must_use]
    pub const fn new(data: T) -> Self {
        Self { data }
    }
}

// =============================================================================
// Error Envelope
// =============================================================================

/// Failure envelope: `{ "error": { "message": ..., "stack": ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: impl Into<String>, stack: Option<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
                stack,
            },
        }
    }
}

// =============================================================================
// Health
// =============================================================================

pub const SERVICE_NAME: &str = "taskforge-api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub timestamp: String,
}

// =============================================================================
// Tests
// =============================================================================
