//! App identifier disambiguation.

use regex::Regex;
use std::sync::LazyLock;

use super::store::StoreOptions;

/// Numeric store-assigned app ids.
static NUMERIC_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// An app identifier as it appears in the `/apps/{id}` path segment.
///
/// The store tells a numeric track id (`324715241`) apart from a bundle
/// identifier (`com.example.app`) by the option name it is sent under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppIdentifier {
    /// All-digit store id, sent as `id`.
    Numeric(String),
    /// Opaque bundle/package id, sent as `appId`.
    Bundle(String),
}

impl AppIdentifier {
    pub fn classify(raw: &str) -> Self {
        if NUMERIC_ID_REGEX.is_match(raw) {
            Self::Numeric(raw.to_string())
        } else {
            Self::Bundle(raw.to_string())
        }
    }

    /// Option name the store expects for this kind of identifier.
    pub fn option_key(&self) -> &'static str {
        match self {
            Self::Numeric(_) => "id",
            Self::Bundle(_) => "appId",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Numeric(id) | Self::Bundle(id) => id,
        }
    }

    /// Base store options addressing this app.
    pub fn to_options(&self) -> StoreOptions {
        StoreOptions::from([(self.option_key().to_string(), self.as_str().to_string())])
    }
}
