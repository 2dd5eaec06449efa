//! Mock Query API for testing.
//!
//! Pre-configured answers or errors are consumed in order. A delay or a gate
//! can hold each call open so tests can act while a request is in flight.
//!
//! ```ignore
//! let api = MockQueryApi::new()
//!     .with_answer(QueryAnswer::text("42"))
//!     .with_error(TransportError::rejected(429, Some(json!({"error": "quota exceeded"}))));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::sleep;

use crate::domain::query::QueryAnswer;
use crate::ports::{QueryApi, QueryRequest, TransportError};

/// Mock `/query` endpoint.
#[derive(Debug, Clone, Default)]
pub struct MockQueryApi {
    responses: Arc<Mutex<VecDeque<Result<QueryAnswer, TransportError>>>>,
    delay: Duration,
    gate: Option<Arc<Notify>>,
    calls: Arc<Mutex<Vec<QueryRequest>>>,
}

impl MockQueryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful answer.
    pub fn with_answer(self, answer: QueryAnswer) -> Self {
        self.responses.lock().unwrap().push_back(Ok(answer));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: TransportError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Holds every call until the gate is notified once for it.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<QueryRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(&self) -> Result<QueryAnswer, TransportError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(QueryAnswer::text("Mock answer")))
    }
}

#[async_trait]
impl QueryApi for MockQueryApi {
    async fn query(&self, request: QueryRequest) -> Result<QueryAnswer, TransportError> {
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.next_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::MediaType;

    fn request() -> QueryRequest {
        QueryRequest::new("q", "general", MediaType::All)
    }

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let api = MockQueryApi::new()
            .with_answer(QueryAnswer::text("first"))
            .with_error(TransportError::network("down"));

        assert_eq!(api.query(request()).await.unwrap(), QueryAnswer::text("first"));
        assert!(api.query(request()).await.is_err());
        assert_eq!(api.query(request()).await.unwrap(), QueryAnswer::text("Mock answer"));
        assert_eq!(api.call_count(), 3);
    }

    #[tokio::test]
    async fn gate_holds_call_until_notified() {
        let gate = Arc::new(Notify::new());
        let api = MockQueryApi::new().with_gate(Arc::clone(&gate));

        let handle = tokio::spawn({
            let api = api.clone();
            async move { api.query(request()).await }
        });
        gate.notify_one();

        assert!(handle.await.unwrap().is_ok());
    }
}
