//! Application routing configuration.
//!
//! Combines the JSON API and the HTML landing page into a single router.
//!
//! # Middleware Stack
//!
//! - **Tracing** - Request/response logging
//! - **Path normalization** - Trailing slash handling
//!
//! Unmatched paths answer 404 `{"error": "Not found"}`; known paths with an
//! unsupported method answer 405 `{"error": "Method not allowed"}`.

use crate::api;
use crate::api::handlers::{method_not_allowed_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes, fallbacks and tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .merge(api::routes::routes())
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// [`router`] wrapped so that `/restaurants/` is served like `/restaurants`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
