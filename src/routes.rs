//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `{BASE_PATH}/*` - Catalog API (see [`crate::api::routes::catalog_routes`])
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `/api/apps/` and
//!   `/api/apps` reach the same handler

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The catalog is nested under `state.base_path`; an empty base path mounts
/// it at the root.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let catalog = api::routes::catalog_routes();

    let router = if state.base_path.is_empty() {
        Router::new().merge(catalog)
    } else {
        Router::new().nest(&state.base_path, catalog)
    };

    let router = router.with_state(state).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
