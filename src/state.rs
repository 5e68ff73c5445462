use std::sync::Arc;

use crate::application::services::CatalogService;
use crate::domain::store::AppStore;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    /// Mount path of the API router, used to root every emitted link.
    pub base_path: Arc<str>,
    /// Honour `X-Forwarded-Proto` / `X-Forwarded-Host`.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn AppStore>, base_path: &str, behind_proxy: bool) -> Self {
        Self {
            catalog: CatalogService::new(store),
            base_path: Arc::from(base_path),
            behind_proxy,
        }
    }
}
