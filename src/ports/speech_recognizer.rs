//! Speech Recognizer Port - optional platform speech-to-text.

use async_trait::async_trait;
use thiserror::Error;

/// Whether the platform offers a capability at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Available,
    Unavailable,
}

impl Capability {
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available)
    }
}

/// Speech recognition failures reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("no speech detected")]
    NoSpeech,

    #[error("microphone permission denied")]
    PermissionDenied,

    #[error("speech recognition failed: {0}")]
    Recognition(String),
}

/// Port for speech-to-text.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Reports whether recognition is supported on this platform.
    fn capability(&self) -> Capability;

    /// Listens for a single utterance and returns its final transcript.
    async fn listen(&self) -> Result<String, SpeechError>;
}
