//! Utility functions for link construction and request handling.
//!
//! - [`url_builder`] - Absolute URL construction and path-segment encoding
//! - [`request_context`] - Protocol/host/mount-path extraction from requests

pub mod request_context;
pub mod url_builder;
