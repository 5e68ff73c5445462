//! Raw store records to hypermedia resources.

use serde_json::{Map, Value};

use crate::api::dto::resources::{AppResource, DeveloperLink};
use crate::domain::store::{StoreError, StoreResult};
use crate::utils::request_context::RequestContext;
use crate::utils::url_builder::{build_url, encode_component};

/// Rewrites one raw app record into an [`AppResource`].
///
/// The record's own `url` moves to `playstoreUrl`; `url` becomes the link to
/// this service's view of the app, next to links for its privacy, similar,
/// reviews and ratings sub-resources. The developer is embedded with a link
/// to `developers/{devId}`. Both ids are percent-encoded as path segments.
///
/// # Errors
///
/// Returns [`StoreError::MalformedRecord`] if `appId` or `developerId` is
/// absent or not a string/number.
pub fn to_resource(ctx: &RequestContext, raw: Value) -> StoreResult<AppResource> {
    let mut attributes = match raw {
        Value::Object(map) => map,
        _ => return Err(StoreError::MalformedRecord("appId")),
    };

    let app_id = identifier_field(&attributes, "appId")?;
    let developer_id = identifier_field(&attributes, "developerId")?;
    let dev_id = attributes
        .get("developerId")
        .cloned()
        .unwrap_or(Value::Null);

    let playstore_url = attributes.get("url").cloned();
    for key in AppResource::LINK_FIELDS {
        attributes.remove(key);
    }

    let app_path = format!("apps/{}", encode_component(&app_id));

    Ok(AppResource {
        attributes,
        url: build_url(ctx, &app_path),
        privacy: build_url(ctx, &format!("{app_path}/privacy")),
        similar: build_url(ctx, &format!("{app_path}/similar")),
        reviews: build_url(ctx, &format!("{app_path}/reviews")),
        ratings: build_url(ctx, &format!("{app_path}/ratings")),
        playstore_url,
        developer: DeveloperLink {
            dev_id,
            url: build_url(ctx, &format!("developers/{}", encode_component(&developer_id))),
        },
    })
}

/// Applies [`to_resource`] to every record, failing on the first bad one.
pub fn to_resources(ctx: &RequestContext, raws: Vec<Value>) -> StoreResult<Vec<AppResource>> {
    raws.into_iter().map(|raw| to_resource(ctx, raw)).collect()
}

/// String form of an identifier field that may be a JSON string or number.
fn identifier_field(attributes: &Map<String, Value>, key: &'static str) -> StoreResult<String> {
    match attributes.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(StoreError::MalformedRecord(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx() -> RequestContext {
        RequestContext::new("http", "localhost:3000", "/api")
    }

    fn raw_app() -> Value {
        json!({
            "id": 553834731,
            "appId": "com.x",
            "title": "Candy Crush Saga",
            "url": "https://apps.apple.com/us/app/candy-crush-saga/id553834731",
            "developerId": "dev&1",
            "score": 4.7
        })
    }

    #[test]
    fn test_links() {
        let resource = to_resource(&ctx(), raw_app()).unwrap();

        assert_eq!(resource.url, "http://localhost:3000/api/apps/com.x");
        assert_eq!(resource.privacy, "http://localhost:3000/api/apps/com.x/privacy");
        assert_eq!(resource.similar, "http://localhost:3000/api/apps/com.x/similar");
        assert_eq!(resource.reviews, "http://localhost:3000/api/apps/com.x/reviews");
        assert_eq!(resource.ratings, "http://localhost:3000/api/apps/com.x/ratings");
    }

    #[test]
    fn test_developer_id_is_percent_encoded() {
        let resource = to_resource(&ctx(), raw_app()).unwrap();

        assert_eq!(resource.developer.dev_id, json!("dev&1"));
        assert_eq!(
            resource.developer.url,
            "http://localhost:3000/api/developers/dev%261"
        );
    }

    #[test]
    fn test_app_id_is_percent_encoded() {
        let raw = json!({ "appId": "a?b c", "developerId": "d" });
        let resource = to_resource(&ctx(), raw).unwrap();

        assert_eq!(resource.url, "http://localhost:3000/api/apps/a%3Fb%20c");
        assert_eq!(
            resource.reviews,
            "http://localhost:3000/api/apps/a%3Fb%20c/reviews"
        );
    }

    #[test]
    fn test_store_url_preserved() {
        let resource = to_resource(&ctx(), raw_app()).unwrap();
        assert_eq!(
            resource.playstore_url,
            Some(json!("https://apps.apple.com/us/app/candy-crush-saga/id553834731"))
        );
    }

    #[test]
    fn test_other_fields_untouched() {
        let value = serde_json::to_value(to_resource(&ctx(), raw_app()).unwrap()).unwrap();

        assert_eq!(value["id"], 553834731);
        assert_eq!(value["appId"], "com.x");
        assert_eq!(value["title"], "Candy Crush Saga");
        assert_eq!(value["score"], 4.7);
        assert_eq!(value["developerId"], "dev&1");
    }

    #[test]
    fn test_input_is_not_mutated() {
        let raw = raw_app();
        let _ = to_resource(&ctx(), raw.clone()).unwrap();
        assert_eq!(raw, raw_app());
    }

    #[test]
    fn test_numeric_developer_id() {
        let raw = json!({ "appId": "com.x", "developerId": 324715241 });
        let resource = to_resource(&ctx(), raw).unwrap();

        assert_eq!(resource.developer.dev_id, json!(324715241));
        assert_eq!(
            resource.developer.url,
            "http://localhost:3000/api/developers/324715241"
        );
        assert!(resource.playstore_url.is_none());
    }

    #[test]
    fn test_existing_link_keys_are_replaced() {
        let raw = json!({
            "appId": "com.x",
            "developerId": "d",
            "reviews": 1200,
            "developer": "Some Studio"
        });
        let value = serde_json::to_value(to_resource(&ctx(), raw).unwrap()).unwrap();

        assert_eq!(value["reviews"], "http://localhost:3000/api/apps/com.x/reviews");
        assert_eq!(value["developer"]["devId"], "d");
    }

    #[test]
    fn test_missing_app_id() {
        let result = to_resource(&ctx(), json!({ "developerId": "d" }));
        assert!(matches!(result, Err(StoreError::MalformedRecord("appId"))));
    }

    #[test]
    fn test_missing_developer_id() {
        let result = to_resource(&ctx(), json!({ "appId": "com.x" }));
        assert!(matches!(result, Err(StoreError::MalformedRecord("developerId"))));
    }

    #[test]
    fn test_non_object_record() {
        assert!(to_resource(&ctx(), json!("com.x")).is_err());
    }

    #[test]
    fn test_to_resources() {
        let raws = vec![
            json!({ "appId": "a", "developerId": "1" }),
            json!({ "appId": "b", "developerId": "2" }),
        ];
        let resources = to_resources(&ctx(), raws).unwrap();

        assert_eq!(resources.len(), 2);
        assert!(resources[1].url.ends_with("/apps/b"));

        let bad = vec![json!({ "appId": "a", "developerId": "1" }), json!({})];
        assert!(to_resources(&ctx(), bad).is_err());
    }
}
