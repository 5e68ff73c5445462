//! Data Transfer Objects for API requests and responses.
//!
//! Response bodies are plain Serde structs; request input arrives only
//! through the path and the query string.

pub mod pagination;
pub mod query;
pub mod resources;
