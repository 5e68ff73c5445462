//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod apps;
pub mod developers;
pub mod index;

pub use apps::{
    app_handler, apps_handler, privacy_handler, ratings_handler, reviews_handler, similar_handler,
};
pub use developers::{developer_handler, developers_handler};
pub use index::index_handler;
