//! Mock platform collaborators: speech, clipboard, alerts, navigation.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::ports::{
    Capability, Clipboard, ClipboardError, Navigator, Notifier, SpeechError, SpeechRecognizer,
};

/// Speech recognizer returning queued transcripts.
#[derive(Debug, Clone)]
pub struct MockSpeechRecognizer {
    capability: Capability,
    results: Arc<Mutex<VecDeque<Result<String, SpeechError>>>>,
    listens: Arc<Mutex<usize>>,
    gate: Option<Arc<Notify>>,
}

impl MockSpeechRecognizer {
    pub fn available() -> Self {
        Self {
            capability: Capability::Available,
            results: Arc::new(Mutex::new(VecDeque::new())),
            listens: Arc::new(Mutex::new(0)),
            gate: None,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            capability: Capability::Unavailable,
            ..Self::available()
        }
    }

    pub fn with_transcript(self, transcript: impl Into<String>) -> Self {
        self.results.lock().unwrap().push_back(Ok(transcript.into()));
        self
    }

    pub fn with_error(self, error: SpeechError) -> Self {
        self.results.lock().unwrap().push_back(Err(error));
        self
    }

    /// Keeps every listen open until the gate is notified once for it.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn listen_count(&self) -> usize {
        *self.listens.lock().unwrap()
    }
}

#[async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    fn capability(&self) -> Capability {
        self.capability
    }

    async fn listen(&self) -> Result<String, SpeechError> {
        *self.listens.lock().unwrap() += 1;
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(SpeechError::NoSpeech))
    }
}

/// In-memory clipboard.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    contents: Arc<Mutex<Option<String>>>,
    fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes are always refused.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clipboard for MockClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError("permission denied".to_string()));
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// Notifier that records every alert.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    alerts: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

/// Navigator that records every route change.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn gated_listen_waits_for_notification() {
        let gate = Arc::new(Notify::new());
        let speech = MockSpeechRecognizer::available()
            .with_transcript("hello")
            .with_gate(Arc::clone(&gate));

        let handle = tokio::spawn({
            let speech = speech.clone();
            async move { speech.listen().await }
        });
        while speech.listen_count() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(!handle.is_finished());

        gate.notify_one();
        assert_eq!(handle.await.unwrap(), Ok("hello".to_string()));
    }
}
