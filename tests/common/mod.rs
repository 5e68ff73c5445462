#![allow(dead_code)]

use app_store_api::api::routes::catalog_routes;
use app_store_api::domain::store::{AppStore, StoreError, StoreOptions, StoreResult};
use app_store_api::state::AppState;
use async_trait::async_trait;
use axum::Router;
use axum_test::{TestRequest, TestServer};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

pub const HOST: &str = "localhost:3000";

/// Store double returning fixed fixtures and recording every call.
#[derive(Clone, Default)]
pub struct FakeStore {
    fail_with: Option<String>,
    reviews: Vec<Value>,
    calls: Arc<Mutex<Vec<(&'static str, StoreOptions)>>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            reviews: vec![review("r1"), review("r2")],
            ..Self::default()
        }
    }

    /// Every operation rejects with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_reviews(mut self, reviews: Vec<Value>) -> Self {
        self.reviews = reviews;
        self
    }

    pub fn calls(&self) -> Vec<(&'static str, StoreOptions)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn operations(&self) -> Vec<&'static str> {
        self.calls().into_iter().map(|(op, _)| op).collect()
    }

    fn record(&self, operation: &'static str, opts: StoreOptions) -> StoreResult<()> {
        self.calls.lock().unwrap().push((operation, opts));
        match &self.fail_with {
            Some(message) => Err(StoreError::rejected(message.clone())),
            None => Ok(()),
        }
    }
}

pub fn app(app_id: &str, developer_id: &str) -> Value {
    json!({
        "id": 553834731,
        "appId": app_id,
        "title": format!("Fixture {app_id}"),
        "url": format!("https://apps.apple.com/us/app/id{app_id}"),
        "developer": "Fixture Studio",
        "developerId": developer_id,
        "score": 4.5
    })
}

pub fn review(id: &str) -> Value {
    json!({ "id": id, "userName": "someone", "score": 5, "text": "Great" })
}

#[async_trait]
impl AppStore for FakeStore {
    async fn search(&self, opts: StoreOptions) -> StoreResult<Vec<Value>> {
        self.record("search", opts)?;
        Ok(vec![app("com.search.one", "dev&1"), app("com.search.two", "2")])
    }

    async fn suggest(&self, opts: StoreOptions) -> StoreResult<Vec<String>> {
        self.record("suggest", opts)?;
        Ok(vec!["panda".to_string(), "panda pop".to_string()])
    }

    async fn list(&self, opts: StoreOptions) -> StoreResult<Vec<Value>> {
        self.record("list", opts)?;
        Ok(vec![app("com.list.one", "1")])
    }

    async fn app(&self, opts: StoreOptions) -> StoreResult<Value> {
        self.record("app", opts)?;
        Ok(app("com.x", "dev&1"))
    }

    async fn similar(&self, opts: StoreOptions) -> StoreResult<Vec<Value>> {
        self.record("similar", opts)?;
        Ok(vec![app("com.similar", "7")])
    }

    async fn privacy(&self, opts: StoreOptions) -> StoreResult<Value> {
        self.record("privacy", opts)?;
        Ok(json!({ "managePrivacyChoicesUrl": null, "privacyTypes": [] }))
    }

    async fn reviews(&self, opts: StoreOptions) -> StoreResult<Vec<Value>> {
        self.record("reviews", opts)?;
        Ok(self.reviews.clone())
    }

    async fn ratings(&self, opts: StoreOptions) -> StoreResult<Value> {
        self.record("ratings", opts)?;
        Ok(json!({ "ratings": 30, "histogram": { "1": 0, "5": 30 } }))
    }

    async fn developer(&self, opts: StoreOptions) -> StoreResult<Vec<Value>> {
        self.record("developer", opts)?;
        Ok(vec![app("org.wikimedia.wikipedia", "324715241")])
    }
}

pub fn create_test_state(store: FakeStore) -> AppState {
    AppState::new(Arc::new(store), "/api", false)
}

pub fn create_test_server(store: FakeStore) -> TestServer {
    let app = Router::new()
        .nest("/api", catalog_routes())
        .with_state(create_test_state(store));

    TestServer::new(app).unwrap()
}

/// `GET` with the `Host` header every link is rooted at.
pub fn get(server: &TestServer, path: &str) -> TestRequest {
    server.get(path).add_header("Host", HOST)
}
