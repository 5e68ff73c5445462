//! Infrastructure layer for external integrations.
//!
//! - [`http_store`] - [`crate::domain::store::AppStore`] over an upstream JSON service

pub mod http_store;

pub use http_store::HttpStore;
