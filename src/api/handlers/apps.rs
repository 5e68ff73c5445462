//! Handlers for the `apps` collection and single-app sub-resources.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::api::dto::query::QueryParams;
use crate::api::dto::resources::{AppResource, ResultList};
use crate::domain::identifier::AppIdentifier;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_context::RequestContext;

/// Which pipeline serves a `GET /apps` request.
///
/// Guards are checked in order and the first match wins: a non-empty `q`
/// selects search, then a non-empty `suggest` selects suggestions, and
/// anything else is a collection listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppsRequest<'a> {
    Search(&'a str),
    Suggest(&'a str),
    List,
}

impl<'a> AppsRequest<'a> {
    pub fn from_query(query: &'a QueryParams) -> Self {
        if let Some(term) = query.get_non_empty("q") {
            Self::Search(term)
        } else if let Some(term) = query.get_non_empty("suggest") {
            Self::Suggest(term)
        } else {
            Self::List
        }
    }
}

/// Searches, suggests or lists apps depending on the query.
///
/// # Endpoint
///
/// `GET /apps`
///
/// # Query Parameters
///
/// - `q`: search term; every other parameter is forwarded to the store
/// - `suggest`: partial term to complete (ignored when `q` is present)
/// - `start` / `num`: listing offset and page size (default 0 / 60)
///
/// # Response
///
/// - search: `{ "results": [AppResource] }`
/// - suggest: `{ "results": [{ "term", "url" }] }`
/// - list: `{ "results": [AppResource], "prev"?, "next"? }`
///
/// # Errors
///
/// Returns 400 Bad Request with the store's message if the store call fails.
pub async fn apps_handler(
    State(state): State<AppState>,
    ctx: RequestContext,
    query: QueryParams,
) -> Result<Response, AppError> {
    let response = match AppsRequest::from_query(&query) {
        AppsRequest::Search(term) => {
            Json(state.catalog.search(&ctx, term, &query).await?).into_response()
        }
        AppsRequest::Suggest(term) => {
            Json(state.catalog.suggest(&ctx, term).await?).into_response()
        }
        AppsRequest::List => Json(state.catalog.list(&ctx, &query).await?).into_response(),
    };

    Ok(response)
}

/// Returns one app.
///
/// # Endpoint
///
/// `GET /apps/{id}` where `id` is a numeric store id or a bundle id.
///
/// # Errors
///
/// Returns 400 Bad Request with the store's message if the store call fails.
pub async fn app_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: RequestContext,
    query: QueryParams,
) -> Result<Json<AppResource>, AppError> {
    let id = AppIdentifier::classify(&id);
    Ok(Json(state.catalog.app(&ctx, &id, &query).await?))
}

/// `GET /apps/{id}/similar`
pub async fn similar_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: RequestContext,
    query: QueryParams,
) -> Result<Json<ResultList<Vec<AppResource>>>, AppError> {
    let id = AppIdentifier::classify(&id);
    Ok(Json(state.catalog.similar(&ctx, &id, &query).await?))
}

/// `GET /apps/{id}/privacy`
pub async fn privacy_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: QueryParams,
) -> Result<Json<ResultList<Value>>, AppError> {
    let id = AppIdentifier::classify(&id);
    Ok(Json(state.catalog.privacy(&id, &query).await?))
}

/// Returns one page of reviews.
///
/// # Endpoint
///
/// `GET /apps/{id}/reviews?page=N`
///
/// `prev` is present while `page > 0`; `next` is present while the current
/// page is non-empty.
pub async fn reviews_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ctx: RequestContext,
    query: QueryParams,
) -> Result<Json<ResultList<Vec<Value>>>, AppError> {
    let id = AppIdentifier::classify(&id);
    Ok(Json(state.catalog.reviews(&ctx, &id, &query).await?))
}

/// `GET /apps/{id}/ratings`
pub async fn ratings_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: QueryParams,
) -> Result<Json<ResultList<Value>>, AppError> {
    let id = AppIdentifier::classify(&id);
    Ok(Json(state.catalog.ratings(&id, &query).await?))
}
