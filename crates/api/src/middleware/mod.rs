//! Cross-cutting request handling.
//!
//! - [`render_errors`]: turns [`ApiError`](crate::errors::ApiError)
//!   responses into the error envelope and logs them
//! - [`not_found`]: fallback for unmatched routes

mod error_envelope;

pub use error_envelope::{ErrorRendering, not_found, render_errors};
