//! Application layer: response shaping and request pipelines.
//!
//! Everything here is a pure function of its explicit inputs (request context,
//! query, store result) except [`services`], which also holds the store handle.
//!
//! - [`transform`] - Raw store records to hypermedia resources
//! - [`pagination`] - Offset and page-number cursor links
//! - [`services`] - Per-route pipelines over the store

pub mod pagination;
pub mod services;
pub mod transform;
