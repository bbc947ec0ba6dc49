//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: database connectivity
//! - `/api/students*`    - Student CRUD (see [`crate::api::routes`])
//! - anything else       - 404 in the JSON error envelope
//! - wrong method        - 405 in the JSON error envelope
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, method_not_allowed_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application with state and tracing applied.
///
/// Integration tests drive this directly; [`app_router`] adds trailing-slash
/// normalization on top for the real server.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::student_routes())
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
