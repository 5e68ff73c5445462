//! Hypermedia response bodies.

use serde::Serialize;
use serde_json::{Map, Value};

/// A result set, optionally with links to adjacent pages.
///
/// `prev`/`next` are only serialized when the endpoint's pagination rule
/// says such a page exists.
#[derive(Debug, Clone, Serialize)]
pub struct ResultList<T> {
    pub results: T,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl<T> ResultList<T> {
    pub fn new(results: T) -> Self {
        Self {
            results,
            prev: None,
            next: None,
        }
    }
}

/// An app record with every identifier rewritten into an absolute link.
///
/// All store fields not listed here are kept as-is in `attributes`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppResource {
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
    pub url: String,
    pub privacy: String,
    pub similar: String,
    pub reviews: String,
    pub ratings: String,
    /// The store's own page for the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playstore_url: Option<Value>,
    pub developer: DeveloperLink,
}

impl AppResource {
    /// Keys set by the transformer; removed from `attributes` so that the
    /// serialized object never carries a key twice.
    pub const LINK_FIELDS: [&'static str; 7] = [
        "url",
        "privacy",
        "similar",
        "reviews",
        "ratings",
        "playstoreUrl",
        "developer",
    ];
}

/// Embedded developer sub-resource.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperLink {
    pub dev_id: Value,
    pub url: String,
}

/// Apps published by one developer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperApps {
    pub dev_id: String,
    pub apps: Vec<AppResource>,
}

/// A search-term completion with a link to run the search.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub term: String,
    pub url: String,
}

/// Entry point links.
#[derive(Debug, Clone, Serialize)]
pub struct IndexLinks {
    pub apps: String,
    pub developers: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_list_without_links() {
        let list = ResultList::new(vec![1, 2]);
        assert_eq!(serde_json::to_value(&list).unwrap(), json!({ "results": [1, 2] }));
    }

    #[test]
    fn test_result_list_with_links() {
        let mut list = ResultList::new(Vec::<i32>::new());
        list.prev = Some("http://h/p".to_string());
        list.next = Some("http://h/n".to_string());

        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({ "results": [], "prev": "http://h/p", "next": "http://h/n" })
        );
    }

    #[test]
    fn test_app_resource_serialization() {
        let mut attributes = Map::new();
        attributes.insert("title".to_string(), json!("Panda"));
        attributes.insert("appId".to_string(), json!("com.panda"));

        let resource = AppResource {
            attributes,
            url: "u".to_string(),
            privacy: "p".to_string(),
            similar: "s".to_string(),
            reviews: "r".to_string(),
            ratings: "ra".to_string(),
            playstore_url: None,
            developer: DeveloperLink {
                dev_id: json!(42),
                url: "d".to_string(),
            },
        };

        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["title"], "Panda");
        assert_eq!(value["appId"], "com.panda");
        assert_eq!(value["url"], "u");
        assert_eq!(value["developer"], json!({ "devId": 42, "url": "d" }));
        assert!(value.get("playstoreUrl").is_none());
    }
}
