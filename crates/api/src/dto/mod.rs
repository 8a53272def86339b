//! Request and response shapes of the HTTP surface.

pub mod request;
pub mod response;
