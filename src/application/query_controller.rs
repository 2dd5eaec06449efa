//! QueryController - lifecycle of the question form.
//!
//! Owns the question field, the media-type and board selection, the answer
//! status, dictation and the transient success indicator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn, Instrument};

use crate::domain::foundation::{Generation, StatusKind};
use crate::domain::lifecycle::{FormState, Lifecycle, RequestStatus, Resolution};
use crate::domain::query::{validate_query, AnswerBlock, MediaType, QueryAnswer, QUERY_FIELD};
use crate::ports::{
    Capability, Clipboard, Notifier, QueryApi, QueryRequest, SpeechRecognizer,
};

use super::lifecycle_cell::{Admission, LifecycleCell, SubmitOutcome};
use super::ControllerError;

/// Key of the server-supplied message in `/query` error bodies.
pub const QUERY_ERROR_KEY: &str = "error";

pub const QUERY_FALLBACK_MESSAGE: &str = "Failed to get a response. Please try again.";
pub const SPEECH_UNAVAILABLE_MESSAGE: &str = "Speech recognition is not supported in this browser.";
pub const COPIED_MESSAGE: &str = "Answer copied to clipboard!";

/// Tunables for the question flow.
#[derive(Debug, Clone)]
pub struct QueryControllerConfig {
    /// Board the questions are asked against until changed.
    pub board: String,
    /// How long the success indicator stays up.
    pub success_flash: Duration,
}

impl Default for QueryControllerConfig {
    fn default() -> Self {
        Self {
            board: "general".to_string(),
            success_flash: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone)]
struct Selection {
    board: String,
    media_type: MediaType,
}

#[derive(Debug, Default)]
struct Flash {
    visible: bool,
    token: u64,
}

struct Inner {
    api: Arc<dyn QueryApi>,
    speech: Arc<dyn SpeechRecognizer>,
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
    speech_capability: Capability,
    success_flash: Duration,
    lifecycle: LifecycleCell<QueryAnswer>,
    selection: Mutex<Selection>,
    listening: AtomicBool,
    flash: Mutex<Flash>,
}

/// Controller for the question form. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct QueryController {
    inner: Arc<Inner>,
}

impl QueryController {
    /// Creates a controller. Speech capability is queried once, here.
    pub fn new(
        api: Arc<dyn QueryApi>,
        speech: Arc<dyn SpeechRecognizer>,
        clipboard: Arc<dyn Clipboard>,
        notifier: Arc<dyn Notifier>,
        config: QueryControllerConfig,
    ) -> Self {
        let speech_capability = speech.capability();
        debug!(?speech_capability, board = %config.board, "Query controller created");

        Self {
            inner: Arc::new(Inner {
                api,
                speech,
                clipboard,
                notifier,
                speech_capability,
                success_flash: config.success_flash,
                lifecycle: LifecycleCell::new(FormState::with_fields([QUERY_FIELD])),
                selection: Mutex::new(Selection {
                    board: config.board,
                    media_type: MediaType::default(),
                }),
                listening: AtomicBool::new(false),
                flash: Mutex::new(Flash::default()),
            }),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // View state
    // ─────────────────────────────────────────────────────────────────────────

    pub fn query(&self) -> String {
        self.inner.lifecycle.form().get(QUERY_FIELD).to_string()
    }

    pub fn board(&self) -> String {
        self.selection().board.clone()
    }

    pub fn media_type(&self) -> MediaType {
        self.selection().media_type
    }

    pub fn status(&self) -> RequestStatus<QueryAnswer> {
        self.inner.lifecycle.status()
    }

    pub fn kind(&self) -> StatusKind {
        self.inner.lifecycle.kind()
    }

    /// Full lifecycle value, including the generation.
    pub fn lifecycle(&self) -> Lifecycle<QueryAnswer> {
        self.inner.lifecycle.snapshot()
    }

    /// The error banner text, if the last attempt failed.
    pub fn error(&self) -> Option<String> {
        self.status().error().map(str::to_string)
    }

    pub fn answer(&self) -> Option<QueryAnswer> {
        self.status().payload().cloned()
    }

    /// Answer parts to render. Empty when there is no answer.
    pub fn answer_blocks(&self) -> Vec<AnswerBlock> {
        self.answer().map(|a| a.blocks()).unwrap_or_default()
    }

    /// True while a request is pending or dictation is listening.
    pub fn is_loading(&self) -> bool {
        self.kind().is_pending() || self.is_listening()
    }

    pub fn is_listening(&self) -> bool {
        self.inner.listening.load(Ordering::SeqCst)
    }

    /// True while the transient success indicator is shown.
    pub fn success_visible(&self) -> bool {
        self.flash().visible
    }

    pub fn speech_capability(&self) -> Capability {
        self.inner.speech_capability
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Field edits
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_query(&self, query: impl Into<String>) {
        self.inner.lifecycle.edit(QUERY_FIELD, query);
    }

    pub fn set_media_type(&self, media_type: MediaType) {
        self.selection().media_type = media_type;
    }

    pub fn set_board(&self, board: impl Into<String>) {
        self.selection().board = board.into();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates the question and, if valid, asks it.
    ///
    /// Ignored while a request is pending or dictation is listening.
    pub async fn submit(&self) -> Result<SubmitOutcome, ControllerError> {
        self.run(None).await
    }

    /// Re-asks after a failure using the question as it is now, including
    /// edits made since the failure.
    ///
    /// Ignored while dictation is listening, like `submit`.
    pub async fn retry(&self) -> Result<SubmitOutcome, ControllerError> {
        self.run(Some(StatusKind::Failed)).await
    }

    /// Empties the question, drops any answer or error and supersedes any
    /// in-flight request. The media-type and board selection are kept.
    pub fn clear(&self) {
        self.inner.lifecycle.clear();
        self.hide_flash();
    }

    /// Dictates the question through speech recognition.
    ///
    /// On success the transcript replaces the question text, unless the form
    /// was cleared while listening.
    pub async fn dictate(&self) -> Result<String, ControllerError> {
        if !self.inner.speech_capability.is_available() {
            self.inner.notifier.alert(SPEECH_UNAVAILABLE_MESSAGE);
            return Err(ControllerError::CapabilityUnavailable("speech recognition"));
        }
        if self.inner.listening.swap(true, Ordering::SeqCst) {
            return Err(ControllerError::Busy("dictation"));
        }

        let generation = self.inner.lifecycle.generation();
        debug!(%generation, "Listening for speech");
        let result = self.inner.speech.listen().await;
        self.inner.listening.store(false, Ordering::SeqCst);

        match result {
            Ok(transcript) => {
                debug!(chars = transcript.chars().count(), "Transcript received");
                if !self
                    .inner
                    .lifecycle
                    .edit_if_current(generation, QUERY_FIELD, transcript.clone())
                {
                    debug!(%generation, "Discarding transcript from superseded dictation");
                    return Err(ControllerError::Superseded("dictation"));
                }
                Ok(transcript)
            }
            Err(err) => {
                warn!(error = %err, "Speech recognition failed");
                self.inner
                    .notifier
                    .alert(&format!("Speech recognition error: {}", err));
                Err(err.into())
            }
        }
    }

    /// Copies the text answer to the clipboard and confirms with an alert.
    ///
    /// Returns `false` without touching the clipboard when there is no text.
    pub async fn copy_answer(&self) -> Result<bool, ControllerError> {
        let text = match self.answer().as_ref().and_then(QueryAnswer::text_part) {
            Some(text) => text.to_string(),
            None => return Ok(false),
        };

        if let Err(err) = self.inner.clipboard.write_text(&text).await {
            warn!(error = %err, "Clipboard write failed");
            return Err(err.into());
        }
        self.inner.notifier.alert(COPIED_MESSAGE);
        Ok(true)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    async fn run(&self, require: Option<StatusKind>) -> Result<SubmitOutcome, ControllerError> {
        if self.is_listening() {
            debug!("Dictation in progress, trigger ignored");
            return Ok(SubmitOutcome::Ignored);
        }
        let (ticket, query) = match self.inner.lifecycle.admit(require, validate_query)? {
            Admission::Accepted(ticket, query) => (ticket, query),
            Admission::Finished(outcome) => return Ok(outcome),
        };

        let request = {
            let selection = self.selection();
            QueryRequest::new(query, selection.board.clone(), selection.media_type)
        };
        let span = tracing::info_span!(
            "query",
            request_id = %ticket.request_id,
            generation = %ticket.generation,
            board = %request.board,
            media_type = %request.media_type,
        );

        let result = self.inner.api.query(request).instrument(span).await;
        let outcome = result.map_err(|err| {
            warn!(error = %err, status = ?err.status(), "Query request failed");
            err.surface(QUERY_ERROR_KEY, QUERY_FALLBACK_MESSAGE)
        });

        Ok(self.apply(ticket.generation, outcome))
    }

    fn apply(&self, generation: Generation, outcome: Result<QueryAnswer, String>) -> SubmitOutcome {
        match self.inner.lifecycle.settle(generation, outcome.clone()) {
            Resolution::Stale { current, offered } => {
                warn!(%current, %offered, "Discarding result of superseded query");
                SubmitOutcome::Superseded
            }
            Resolution::Applied(()) => match outcome {
                Ok(answer) => {
                    info!(%generation, blocks = answer.blocks().len(), "Query answered");
                    self.show_flash(generation);
                    SubmitOutcome::Succeeded
                }
                Err(message) => SubmitOutcome::Failed(message),
            },
        }
    }

    /// Shows the success indicator for the answer applied at `generation`.
    fn show_flash(&self, generation: Generation) {
        let token = {
            let mut flash = self.flash();
            // A clear moves the generation before it takes this lock.
            if self.inner.lifecycle.generation() != generation {
                return;
            }
            flash.token += 1;
            flash.visible = true;
            flash.token
        };

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.success_flash).await;
            let mut flash = inner.flash.lock().unwrap_or_else(PoisonError::into_inner);
            if flash.token == token {
                flash.visible = false;
            }
        });
    }

    fn hide_flash(&self) {
        let mut flash = self.flash();
        flash.token += 1;
        flash.visible = false;
    }

    fn selection(&self) -> MutexGuard<'_, Selection> {
        self.inner.selection.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn flash(&self) -> MutexGuard<'_, Flash> {
        self.inner.flash.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockClipboard, MockQueryApi, MockSpeechRecognizer, RecordingNotifier};

    fn controller() -> QueryController {
        QueryController::new(
            Arc::new(MockQueryApi::new()),
            Arc::new(MockSpeechRecognizer::available()),
            Arc::new(MockClipboard::new()),
            Arc::new(RecordingNotifier::new()),
            QueryControllerConfig::default(),
        )
    }

    #[tokio::test]
    async fn flash_for_current_generation_is_shown() {
        let controller = controller();
        controller.show_flash(controller.inner.lifecycle.generation());
        assert!(controller.success_visible());
    }

    #[tokio::test]
    async fn flash_after_intervening_clear_stays_hidden() {
        let controller = controller();
        let applied_at = controller.inner.lifecycle.generation();
        controller.clear();

        controller.show_flash(applied_at);

        assert!(!controller.success_visible());
    }
}
