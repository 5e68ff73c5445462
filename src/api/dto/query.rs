//! Raw query-string parameters.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use url::form_urlencoded;

use crate::domain::store::StoreOptions;
use crate::utils::url_builder::encode_component;

/// Query-string pairs of the current request, in their original order.
///
/// Pagination links re-render this value with a single cursor parameter
/// rewritten, so every other filter the client sent is preserved across
/// pages. Unknown parameters are forwarded to the store verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parses an `application/x-www-form-urlencoded` query string.
    pub fn parse(query: &str) -> Self {
        let pairs = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value for `key`, treating an empty value as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Returns a copy with `key` set to `value`.
    ///
    /// The first occurrence keeps its position; later duplicates are dropped.
    /// A missing key is appended.
    pub fn with(&self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        let mut pairs = Vec::with_capacity(self.pairs.len() + 1);
        let mut replaced = false;

        for (k, v) in &self.pairs {
            if k == key {
                if !replaced {
                    pairs.push((k.clone(), value.clone()));
                    replaced = true;
                }
            } else {
                pairs.push((k.clone(), v.clone()));
            }
        }

        if !replaced {
            pairs.push((key.to_string(), value));
        }

        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders back to a query string (without the leading `?`).
    ///
    /// Keys and values are percent-encoded component-wise, so a space is
    /// written as `%20`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Layers the request parameters over `base`, request values winning.
    ///
    /// For repeated keys the first value is forwarded.
    pub fn merged_into(&self, mut base: StoreOptions) -> StoreOptions {
        for (key, value) in self.pairs.iter().rev() {
            base.insert(key.clone(), value.clone());
        }
        base
    }

    /// The request parameters alone as store options.
    pub fn to_options(&self) -> StoreOptions {
        self.merged_into(StoreOptions::new())
    }
}

impl<S: Send + Sync> FromRequestParts<S> for QueryParams {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Infallible> {
        Ok(Self::parse(parts.uri.query().unwrap_or_default()))
    }
}
