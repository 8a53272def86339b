//! HTTP API for TaskForge
//!
//! Exposes the task collection under `/api/tasks` and a health probe under
//! `/api/health`. Every failure is rendered as an `{ "error": ... }`
//! envelope by [`middleware::render_errors`].

pub mod config;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
