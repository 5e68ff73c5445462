//! # App Store API
//!
//! A hypermedia REST facade over an app-store data provider, built with Axum.
//!
//! Clients browse apps, developers, reviews, ratings and similar apps through
//! plain `GET` requests. Every identifier in a response is rewritten into an
//! absolute link rooted at the address the client used, and paged endpoints
//! carry `prev`/`next` links so no out-of-band paging knowledge is needed.
//! The service holds no state between requests.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Store capability trait and identifier rules
//! - **Application Layer** ([`application`]) - Resource transformation, pagination and
//!   per-route pipelines
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client for the upstream store service
//! - **API Layer** ([`api`]) - Handlers, DTOs, routes and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export STORE_URL="http://localhost:4000/store"
//! cargo run
//! curl http://localhost:3000/api/apps?q=panda
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::resources::{AppResource, ResultList};
    pub use crate::application::services::CatalogService;
    pub use crate::domain::store::{AppStore, StoreError, StoreOptions, StoreResult};
    pub use crate::error::AppError;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
