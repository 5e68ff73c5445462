//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into catalog pipelines and formats
//! responses as linked JSON resources.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies, query parameters and pagination cursors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
