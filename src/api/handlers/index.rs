//! Handler for the API entry point.

use axum::Json;

use crate::api::dto::resources::IndexLinks;
use crate::utils::request_context::RequestContext;
use crate::utils::url_builder::build_url;

/// Links to the top-level collections.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// {
///   "apps": "http://localhost:3000/api/apps",
///   "developers": "http://localhost:3000/api/developers"
/// }
/// ```
pub async fn index_handler(ctx: RequestContext) -> Json<IndexLinks> {
    Json(IndexLinks {
        apps: build_url(&ctx, "apps"),
        developers: build_url(&ctx, "developers"),
    })
}
