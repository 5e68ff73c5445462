//! Domain layer: the store contract and identifier rules.
//!
//! - [`store`] - The [`store::AppStore`] capability consumed by every route
//! - [`identifier`] - Numeric vs bundle app identifier disambiguation
//!
//! The store is an external collaborator. Concrete implementations live in
//! [`crate::infrastructure`]; tests substitute a mock or a fixture store.

pub mod identifier;
pub mod store;
