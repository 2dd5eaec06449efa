//! API Adapters - HTTP implementations of the API ports.

mod http_client;

pub use http_client::{HttpApiClient, HttpApiConfig};
