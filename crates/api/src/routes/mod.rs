//! Routing definitions for the TaskForge API.

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, put};
use taskforge_workflow::ports::TaskStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{ErrorRendering, not_found, render_errors};
use crate::state::AppState;

// =============================================================================
// Router Creation
// =============================================================================

/// Creates the API router with all routes and middleware.
///
/// Unmatched paths and unsupported methods fall through to [`not_found`].
/// Error responses are rendered according to `rendering`.
pub fn create_router<Store>(state: AppState<Store>, rendering: ErrorRendering) -> Router
where
    Store: TaskStore,
{
    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/tasks",
            get(handlers::list_tasks::<Store>).post(handlers::create_task::<Store>),
        )
        .route(
            "/tasks/{id}",
            put(handlers::update_task::<Store>).delete(handlers::delete_task::<Store>),
        )
        .method_not_allowed_fallback(not_found);

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .layer(from_fn_with_state(rendering, render_errors))
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

// =============================================================================
// Tests
// =============================================================================
