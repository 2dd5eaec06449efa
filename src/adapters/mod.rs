//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the controllers to external systems:
//! - `api` - reqwest client for the Askboard API server
//! - `mock` - in-memory collaborators for tests and demos

pub mod api;
pub mod mock;

pub use api::{HttpApiClient, HttpApiConfig};
