//! HTTP API Client - reqwest implementation of the API ports.
//!
//! Talks JSON to the Askboard API server:
//!
//! - `POST {base_url}/query` for [`QueryApi`]
//! - `POST {base_url}/auth/register` for [`AuthApi`]
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpApiConfig::new("https://api.askboard.dev")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = HttpApiClient::new(config)?;
//! ```
//!
//! Non-success responses become [`TransportError::Rejected`] carrying the
//! parsed JSON body, so callers can pick out the server's own message.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::domain::query::QueryAnswer;
use crate::ports::{AuthApi, QueryApi, QueryRequest, RegisterRequest, TransportError};

const QUERY_PATH: &str = "/query";
const REGISTER_PATH: &str = "/auth/register";

/// Configuration for the HTTP API client.
#[derive(Debug, Clone)]
pub struct HttpApiConfig {
    /// Base URL of the API server, without trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// reqwest-backed API client.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    config: HttpApiConfig,
    client: Client,
}

impl HttpApiClient {
    /// Creates a client with the given configuration.
    pub fn new(config: HttpApiConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Posts a JSON body and turns non-success statuses into errors.
    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response, TransportError> {
        let url = self.url(path);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        self.handle_response_status(response).await
    }

    fn map_send_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                timeout_millis: u64::try_from(self.config.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else if err.is_connect() {
            TransportError::network(format!("Connection failed: {}", err))
        } else {
            TransportError::network(err.to_string())
        }
    }

    async fn handle_response_status(&self, response: Response) -> Result<Response, TransportError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // The body is optional and may not be JSON at all.
        let error_body = response.text().await.unwrap_or_default();
        let body = serde_json::from_str::<Value>(&error_body).ok();
        debug!(status = status.as_u16(), has_body = body.is_some(), "API rejected request");

        Err(TransportError::rejected(status.as_u16(), body))
    }
}

#[async_trait]
impl QueryApi for HttpApiClient {
    async fn query(&self, request: QueryRequest) -> Result<QueryAnswer, TransportError> {
        let response = self.post(QUERY_PATH, &request).await?;
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::network(format!("Failed to read response: {}", e)))?;

        if text.trim().is_empty() {
            return Ok(QueryAnswer::default());
        }
        serde_json::from_str(&text)
            .map_err(|e| TransportError::parse(format!("Failed to parse answer: {}", e)))
    }
}

#[async_trait]
impl AuthApi for HttpApiClient {
    async fn register(&self, request: RegisterRequest) -> Result<(), TransportError> {
        self.post(REGISTER_PATH, &request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let config = HttpApiConfig::new("http://localhost:5000/api/");
        assert_eq!(config.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn urls_join_paths() {
        let client = HttpApiClient::new(HttpApiConfig::new("http://localhost:5000")).unwrap();
        assert_eq!(client.url(QUERY_PATH), "http://localhost:5000/query");
        assert_eq!(client.url(REGISTER_PATH), "http://localhost:5000/auth/register");
    }

    #[tokio::test]
    async fn connection_refused_is_network_error() {
        // Port 9 (discard) is essentially never listening on test hosts.
        let client = HttpApiClient::new(
            HttpApiConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let err = client
            .query(QueryRequest::new("q", "general", Default::default()))
            .await
            .unwrap_err();
        assert!(
            matches!(err, TransportError::Network(_) | TransportError::Timeout { .. }),
            "unexpected error: {:?}",
            err
        );
    }
}
