//! `From` implementations turning lower-layer errors into [`ApiError`].

use taskforge_domain::task::TaskIdError;
use taskforge_workflow::errors::WorkflowError;

use super::api_error::{ApiError, error_trace};

// =============================================================================
// From<WorkflowError> for ApiError
// =============================================================================

impl From<WorkflowError> for ApiError {
    fn from(error: WorkflowError) -> Self {
        let message = error.to_string();
        let trace = error_trace(&error);
        match error {
            WorkflowError::Validation { .. } => Self::ValidationError { message, trace },
            WorkflowError::NotFound { .. } => Self::NotFound { message, trace },
            WorkflowError::StoreMissing { .. }
            | WorkflowError::DataFormat
            | WorkflowError::IdsExhausted
            | WorkflowError::Unclassified(_) => Self::InternalError { message, trace },
        }
    }
}

// =============================================================================
// From<TaskIdError> for ApiError
// =============================================================================

impl From<TaskIdError> for ApiError {
    fn from(error: TaskIdError) -> Self {
        WorkflowError::from(error).into()
    }
}

// =============================================================================
// From<serde_json::Error> for ApiError
// =============================================================================

/// A request body that is not valid JSON.
impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::ValidationError {
            message: error.to_string(),
            trace: error_trace(&error),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
