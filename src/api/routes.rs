//! API route configuration.

use crate::api::handlers::{
    app_handler, apps_handler, developer_handler, developers_handler, index_handler,
    privacy_handler, ratings_handler, reviews_handler, similar_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All catalog routes. Read-only; every endpoint is a `GET`.
///
/// # Endpoints
///
/// - `GET /`                     - Links to `apps` and `developers`
/// - `GET /apps`                 - Search (`q`), suggest (`suggest`) or list
/// - `GET /apps/{id}`            - App detail
/// - `GET /apps/{id}/similar`    - Similar apps
/// - `GET /apps/{id}/privacy`    - Privacy details
/// - `GET /apps/{id}/reviews`    - Reviews (page-number pagination)
/// - `GET /apps/{id}/ratings`    - Rating histogram
/// - `GET /developers`           - Usage hint (400)
/// - `GET /developers/{dev_id}`  - Apps by developer
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/apps", get(apps_handler))
        .route("/apps/{id}", get(app_handler))
        .route("/apps/{id}/similar", get(similar_handler))
        .route("/apps/{id}/privacy", get(privacy_handler))
        .route("/apps/{id}/reviews", get(reviews_handler))
        .route("/apps/{id}/ratings", get(ratings_handler))
        .route("/developers", get(developers_handler))
        .route("/developers/{dev_id}", get(developer_handler))
}
