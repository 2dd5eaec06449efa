//! Query API Port - asks a question against a board.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::query::{MediaType, QueryAnswer};

use super::TransportError;

/// Port for the `POST /query` endpoint.
#[async_trait]
pub trait QueryApi: Send + Sync {
    /// Sends one question and returns the answer parts the server produced.
    async fn query(&self, request: QueryRequest) -> Result<QueryAnswer, TransportError>;
}

/// Body of `POST /query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub query: String,
    pub board: String,
    pub media_type: MediaType,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>, board: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            query: query.into(),
            board: board.into(),
            media_type,
        }
    }
}
