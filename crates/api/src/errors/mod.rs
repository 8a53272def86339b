//! API error handling and response conversion.
//!
//! - [`ApiError`]: the error type every handler returns
//! - [`conversion`]: conversions from workflow and parsing errors
//! - [`error_trace`]: the diagnostic trace exposed as `stack` outside
//!   production

pub mod api_error;
pub mod conversion;

pub use api_error::{ApiError, error_trace};
