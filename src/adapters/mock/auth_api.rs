//! Mock Auth API for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::ports::{AuthApi, RegisterRequest, TransportError};

/// Mock `/auth/register` endpoint. Succeeds once the queue is exhausted.
#[derive(Debug, Clone, Default)]
pub struct MockAuthApi {
    responses: Arc<Mutex<VecDeque<Result<(), TransportError>>>>,
    gate: Option<Arc<Notify>>,
    calls: Arc<Mutex<Vec<RegisterRequest>>>,
}

impl MockAuthApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a failure.
    pub fn with_error(self, error: TransportError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queues an explicit success.
    pub fn with_success(self) -> Self {
        self.responses.lock().unwrap().push_back(Ok(()));
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

    pub fn get_calls(&self) -> Vec<RegisterRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn register(&self, request: RegisterRequest) -> Result<(), TransportError> {
        self.calls.lock().unwrap().push(request);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.responses.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }
}
