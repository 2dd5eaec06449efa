//! Transport errors shared by the HTTP API ports.

use serde_json::Value;
use thiserror::Error;

/// Failure of a call to the external API server.
///
/// The server may attach a JSON body naming the problem; which key it uses
/// depends on the endpoint, so extraction takes the key as an argument.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// Server answered with a non-success status.
    #[error("server responded with status {status}")]
    Rejected {
        status: u16,
        /// Parsed error body, when the server sent JSON.
        body: Option<Value>,
    },

    /// Connection could not be established or was dropped.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_millis}ms")]
    Timeout { timeout_millis: u64 },

    /// Success response that could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl TransportError {
    /// Creates a rejection error.
    pub fn rejected(status: u16, body: Option<Value>) -> Self {
        Self::Rejected { status, body }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-supplied message under `key`, if present and non-blank.
    pub fn server_message(&self, key: &str) -> Option<&str> {
        match self {
            Self::Rejected {
                body: Some(body), ..
            } => body
                .get(key)
                .and_then(Value::as_str)
                .filter(|msg| !msg.trim().is_empty()),
            _ => None,
        }
    }

    /// Message to show the user: the server's own words, else `fallback`.
    pub fn surface(&self, key: &str, fallback: &str) -> String {
        self.server_message(key).unwrap_or(fallback).to_string()
    }
}
