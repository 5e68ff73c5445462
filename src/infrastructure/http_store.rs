//! [`AppStore`] backed by an upstream scraper service speaking JSON over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::store::{AppStore, StoreError, StoreOptions, StoreResult};

/// Calls `GET {base_url}/{operation}?{options}` for every store operation.
///
/// The upstream service owns all scraping, ranking and network concerns.
/// Its non-2xx answers become [`StoreError::Rejected`] carrying the upstream
/// `message` when one is present. No retries, no caching.
pub struct HttpStore {
    client: Client,
    base_url: Url,
}

/// Error envelope returned by the upstream service.
#[derive(Debug, Deserialize)]
struct UpstreamError {
    message: String,
}

/// Suggestions arrive either as bare strings or as `{ "term": ... }` objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SuggestEntry {
    Term(String),
    Object { term: String },
}

impl From<SuggestEntry> for String {
    fn from(entry: SuggestEntry) -> Self {
        match entry {
            SuggestEntry::Term(term) | SuggestEntry::Object { term } => term,
        }
    }
}

impl HttpStore {
    /// Creates a client for the store service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Transport`] if the HTTP client cannot be built,
    /// or [`StoreError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("app-store-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // Exactly one trailing slash, so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| StoreError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, operation: &str, opts: &StoreOptions) -> StoreResult<Url> {
        let mut url = self
            .base_url
            .join(operation)
            .map_err(|e| StoreError::InvalidBaseUrl(e.to_string()))?;

        if !opts.is_empty() {
            url.query_pairs_mut().extend_pairs(opts);
        }
        Ok(url)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        opts: StoreOptions,
    ) -> StoreResult<T> {
        let url = self.endpoint(operation, &opts)?;
        debug!(operation, %url, "calling store");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(StoreError::Rejected(upstream_message(status, &body)));
        }

        serde_json::from_slice(&body).map_err(|source| StoreError::Decode { operation, source })
    }
}

/// The upstream `message`, or the bare status line.
fn upstream_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<UpstreamError>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| status.to_string())
}

#[async_trait]
impl AppStore for HttpStore {
    async fn search(&self, opts: StoreOptions) -> StoreResult<Vec<Value>> {
        self.call("search", opts).await
    }

    async fn suggest(&self, opts: StoreOptions) -> StoreResult<Vec<String>> {
        let entries: Vec<SuggestEntry> = self.call("suggest", opts).await?;
        Ok(entries.into_iter().map(String::from).collect())
    }

    async fn list(&self, opts: StoreOptions) -> StoreResult<Vec<Value>> {
        self.call("list", opts).await
    }

    async fn app(&self, opts: StoreOptions) -> StoreResult<Value> {
        self.call("app", opts).await
    }

    async fn similar(&self, opts: StoreOptions) -> StoreResult<Vec<Value>> {
        self.call("similar", opts).await
    }

    async fn privacy(&self, opts: StoreOptions) -> StoreResult<Value> {
        self.call("privacy", opts).await
    }

    async fn reviews(&self, opts: StoreOptions) -> StoreResult<Vec<Value>> {
        self.call("reviews", opts).await
    }

    async fn ratings(&self, opts: StoreOptions) -> StoreResult<Value> {
        self.call("ratings", opts).await
    }

    async fn developer(&self, opts: StoreOptions) -> StoreResult<Vec<Value>> {
        self.call("developer", opts).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_operation() {
        let store = HttpStore::new("http://scraper:8080/store", 5).unwrap();
        let url = store.endpoint("search", &StoreOptions::new()).unwrap();
        assert_eq!(url.as_str(), "http://scraper:8080/store/search");
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let store = HttpStore::new("http://scraper:8080/", 5).unwrap();
        let url = store.endpoint("app", &StoreOptions::new()).unwrap();
        assert_eq!(url.as_str(), "http://scraper:8080/app");
    }

    #[test]
    fn test_endpoint_encodes_options() {
        let store = HttpStore::new("http://scraper", 5).unwrap();
        let opts = StoreOptions::from([
            ("devId".to_string(), "a&b".to_string()),
            ("term".to_string(), "angry birds".to_string()),
        ]);
        let url = store.endpoint("developer", &opts).unwrap();
        assert_eq!(url.query(), Some("devId=a%26b&term=angry+birds"));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpStore::new("not a url", 5),
            Err(StoreError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_upstream_message() {
        assert_eq!(
            upstream_message(StatusCode::NOT_FOUND, br#"{"message":"App not found (404)"}"#),
            "App not found (404)"
        );
        assert_eq!(
            upstream_message(StatusCode::BAD_GATEWAY, b"<html>oops</html>"),
            "502 Bad Gateway"
        );
    }

    #[test]
    fn test_suggest_entry_forms() {
        let entries: Vec<SuggestEntry> =
            serde_json::from_str(r#"["panda", {"term": "pandora"}]"#).unwrap();
        let terms: Vec<String> = entries.into_iter().map(String::from).collect();
        assert_eq!(terms, vec!["panda", "pandora"]);
    }
}
