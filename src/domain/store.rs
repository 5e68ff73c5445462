//! Store capability trait and error types.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

/// Options sent to a store operation.
///
/// Keys are the store's own option names (`term`, `id`, `appId`, `devId`,
/// `num`, `page`, ...). Values are passed through verbatim.
pub type StoreOptions = BTreeMap<String, String>;

/// Errors that can occur while talking to the store.
///
/// The `Display` output of every variant is what clients see in the
/// `message` field of the 400 response.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store refused or failed the operation with its own message.
    #[error("{0}")]
    Rejected(String),

    /// Network or TLS failure reaching the store.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a body that is not the expected JSON shape.
    #[error("Invalid response from store for {operation}: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An app record is missing a field every app must carry.
    #[error("Store record is missing required field `{0}`")]
    MalformedRecord(&'static str),

    /// The configured store location cannot be used.
    #[error("Invalid store URL: {0}")]
    InvalidBaseUrl(String),
}

impl StoreError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The external app-store data provider.
///
/// Every operation is a single asynchronous call. Records are returned as raw
/// JSON so that fields this service does not know about survive untouched.
///
/// # Implementations
///
/// - [`crate::infrastructure::HttpStore`] - forwards calls to an upstream scraper service
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppStore: Send + Sync {
    /// Full-text app search. Expects at least `term`.
    async fn search(&self, opts: StoreOptions) -> StoreResult<Vec<Value>>;

    /// Search-term completions for a partial `term`.
    async fn suggest(&self, opts: StoreOptions) -> StoreResult<Vec<String>>;

    /// Collection listing (top charts and similar).
    async fn list(&self, opts: StoreOptions) -> StoreResult<Vec<Value>>;

    /// A single app, addressed by `id` or `appId`.
    async fn app(&self, opts: StoreOptions) -> StoreResult<Value>;

    /// Apps related to the one addressed by `id` or `appId`.
    async fn similar(&self, opts: StoreOptions) -> StoreResult<Vec<Value>>;

    /// Privacy details of an app.
    async fn privacy(&self, opts: StoreOptions) -> StoreResult<Value>;

    /// One page of user reviews.
    async fn reviews(&self, opts: StoreOptions) -> StoreResult<Vec<Value>>;

    /// Rating histogram of an app.
    async fn ratings(&self, opts: StoreOptions) -> StoreResult<Value>;

    /// All apps published by `devId`.
    async fn developer(&self, opts: StoreOptions) -> StoreResult<Vec<Value>>;
}
