//! Store access and response shaping for every catalog route.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::api::dto::query::QueryParams;
use crate::api::dto::resources::{AppResource, DeveloperApps, ResultList, Suggestion};
use crate::application::pagination::{paginate_offset, paginate_page};
use crate::application::transform::{to_resource, to_resources};
use crate::domain::identifier::AppIdentifier;
use crate::domain::store::{AppStore, StoreOptions};
use crate::error::AppError;
use crate::utils::request_context::RequestContext;
use crate::utils::url_builder::{build_url_with_query, encode_component};

/// Sequences one store call per request with the transforms its route needs.
///
/// Each method is a straight pipeline: build options, await the store,
/// rewrite records into resources, attach pagination links. The first
/// failure short-circuits to the caller as an [`AppError`]. The service
/// keeps no state besides the store handle.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn AppStore>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(store: Arc<dyn AppStore>) -> Self {
        Self { store }
    }

    /// Full-text search. The request query is forwarded alongside `term`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store fails or a record is malformed.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        term: &str,
        query: &QueryParams,
    ) -> Result<ResultList<Vec<AppResource>>, AppError> {
        let opts = query.merged_into(StoreOptions::from([("term".to_string(), term.to_string())]));
        debug!(term, "searching store");

        let apps = self.store.search(opts).await?;
        Ok(ResultList::new(to_resources(ctx, apps)?))
    }

    /// Term completions, each linked to the search it would run.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store fails.
    pub async fn suggest(
        &self,
        ctx: &RequestContext,
        term: &str,
    ) -> Result<ResultList<Vec<Suggestion>>, AppError> {
        let opts = StoreOptions::from([("term".to_string(), term.to_string())]);
        let terms = self.store.suggest(opts).await?;

        let suggestions = terms
            .into_iter()
            .map(|term| {
                let search = QueryParams::default().with("q", &term).to_query_string();
                Suggestion {
                    url: build_url_with_query(ctx, "apps", &search),
                    term,
                }
            })
            .collect();

        Ok(ResultList::new(suggestions))
    }

    /// Collection listing with offset pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store fails or a record is malformed.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        query: &QueryParams,
    ) -> Result<ResultList<Vec<AppResource>>, AppError> {
        let apps = self.store.list(query.to_options()).await?;
        let list = ResultList::new(to_resources(ctx, apps)?);
        Ok(paginate_offset(ctx, query, "apps", list))
    }

    /// A single app.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store fails or the record is malformed.
    pub async fn app(
        &self,
        ctx: &RequestContext,
        id: &AppIdentifier,
        query: &QueryParams,
    ) -> Result<AppResource, AppError> {
        let app = self.store.app(query.merged_into(id.to_options())).await?;
        Ok(to_resource(ctx, app)?)
    }

    /// Apps similar to `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store fails or a record is malformed.
    pub async fn similar(
        &self,
        ctx: &RequestContext,
        id: &AppIdentifier,
        query: &QueryParams,
    ) -> Result<ResultList<Vec<AppResource>>, AppError> {
        let apps = self.store.similar(query.merged_into(id.to_options())).await?;
        Ok(ResultList::new(to_resources(ctx, apps)?))
    }

    /// Privacy details, passed through as-is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store fails.
    pub async fn privacy(
        &self,
        id: &AppIdentifier,
        query: &QueryParams,
    ) -> Result<ResultList<Value>, AppError> {
        let privacy = self.store.privacy(query.merged_into(id.to_options())).await?;
        Ok(ResultList::new(privacy))
    }

    /// One page of reviews with page-number pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store fails.
    pub async fn reviews(
        &self,
        ctx: &RequestContext,
        id: &AppIdentifier,
        query: &QueryParams,
    ) -> Result<ResultList<Vec<Value>>, AppError> {
        let reviews = self.store.reviews(query.merged_into(id.to_options())).await?;
        let subpath = format!("apps/{}/reviews", encode_component(id.as_str()));
        Ok(paginate_page(ctx, query, &subpath, ResultList::new(reviews)))
    }

    /// Rating histogram, passed through as-is.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store fails.
    pub async fn ratings(
        &self,
        id: &AppIdentifier,
        query: &QueryParams,
    ) -> Result<ResultList<Value>, AppError> {
        let ratings = self.store.ratings(query.merged_into(id.to_options())).await?;
        Ok(ResultList::new(ratings))
    }

    /// All apps by one developer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store fails or a record is malformed.
    pub async fn developer(
        &self,
        ctx: &RequestContext,
        dev_id: &str,
        query: &QueryParams,
    ) -> Result<DeveloperApps, AppError> {
        let base = StoreOptions::from([("devId".to_string(), dev_id.to_string())]);
        let opts = query.merged_into(base);
        let apps = self.store.developer(opts).await?;

        Ok(DeveloperApps {
            dev_id: dev_id.to_string(),
            apps: to_resources(ctx, apps)?,
        })
    }
}
