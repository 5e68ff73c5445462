//! Handlers for developer resources.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::query::QueryParams;
use crate::api::dto::resources::DeveloperApps;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_context::RequestContext;
use crate::utils::url_builder::{build_url, encode_component};

/// Developer used in the usage hint (Wikimedia Foundation).
const EXAMPLE_DEVELOPER_ID: &str = "324715241";

/// Returns every app published by a developer.
///
/// # Endpoint
///
/// `GET /developers/{dev_id}`
///
/// # Response
///
/// ```json
/// { "devId": "324715241", "apps": [AppResource, ...] }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with the store's message if the store call fails.
pub async fn developer_handler(
    State(state): State<AppState>,
    Path(dev_id): Path<String>,
    ctx: RequestContext,
    query: QueryParams,
) -> Result<Json<DeveloperApps>, AppError> {
    Ok(Json(state.catalog.developer(&ctx, &dev_id, &query).await?))
}

/// The developer collection cannot be listed.
///
/// # Endpoint
///
/// `GET /developers`
///
/// Always answers 400 with a link to a concrete developer.
pub async fn developers_handler(ctx: RequestContext) -> AppError {
    AppError::with_example(
        "Please specify a developer id.",
        build_url(&ctx, &format!("developers/{}", encode_component(EXAMPLE_DEVELOPER_ID))),
    )
}
