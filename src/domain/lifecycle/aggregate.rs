//! Lifecycle aggregate: one form, one request status, one generation.
//!
//! Every operation takes the current state by reference and returns the next
//! state, so a controller swaps the whole value at once and never observes a
//! half-updated form.
//!
//! # Invariants
//!
//! - Status moves only along the [`StatusKind`] transition table.
//! - The generation advances on every move into `Pending` and on every clear.
//! - A result is applied only when it carries the current generation and the
//!   status is still `Pending`; anything else is stale and dropped.

use crate::domain::foundation::{
    Generation, RequestId, StateMachine, StatusKind, TransitionError, ValidationError,
};

use super::{FormState, RequestStatus};

/// Handle for one accepted submission.
///
/// Carries the generation the result must match and the field values that
/// were sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub generation: Generation,
    pub request_id: RequestId,
    pub snapshot: FormState,
}

/// Outcome of offering a resolved result to the lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<S> {
    /// The result belonged to the current request and produced a new state.
    Applied(S),
    /// The result belonged to a superseded request.
    Stale { current: Generation, offered: Generation },
}

impl<S> Resolution<S> {
    pub fn is_stale(&self) -> bool {
        matches!(self, Resolution::Stale { .. })
    }
}

/// Per-form lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lifecycle<P> {
    form: FormState,
    status: RequestStatus<P>,
    generation: Generation,
}

impl<P: Clone> Lifecycle<P> {
    /// Creates an idle lifecycle over the given (empty) fields.
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            status: RequestStatus::Idle,
            generation: Generation::INITIAL,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn status(&self) -> &RequestStatus<P> {
        &self.status
    }

    pub fn kind(&self) -> StatusKind {
        self.status.kind()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Edits one field. Status is untouched, so an edited form can be retried.
    pub fn edit(&self, field: &str, value: impl Into<String>) -> Self {
        Self {
            form: self.form.with_value(field, value),
            status: self.status.clone(),
            generation: self.generation,
        }
    }

    /// Records a local validation failure without any request being made.
    ///
    /// A settled status is reset to `Idle` first, then moved to `Failed`.
    pub fn reject(&self, error: &ValidationError) -> Result<Self, TransitionError> {
        let idle = self.idle_for_new_attempt()?;
        idle.kind().transition_to(StatusKind::Failed)?;
        Ok(Self {
            form: self.form.clone(),
            status: RequestStatus::Failed(error.message().to_string()),
            generation: self.generation,
        })
    }

    /// Accepts a submission: moves to `Pending` under a fresh generation and
    /// returns the ticket the eventual result must present.
    ///
    /// A settled status is reset to `Idle` first. Fails while `Pending`.
    pub fn begin(&self) -> Result<(Self, SubmissionTicket), TransitionError> {
        let idle = self.idle_for_new_attempt()?;
        idle.kind().transition_to(StatusKind::Pending)?;

        let generation = self.generation.next();
        let ticket = SubmissionTicket {
            generation,
            request_id: RequestId::new(),
            snapshot: self.form.clone(),
        };
        let next = Self {
            form: self.form.clone(),
            status: RequestStatus::Pending,
            generation,
        };
        Ok((next, ticket))
    }

    /// Offers a resolved result. On success the form is reset.
    pub fn resolve(&self, generation: Generation, outcome: Result<P, String>) -> Resolution<Self> {
        if generation != self.generation || !self.status.is_pending() {
            return Resolution::Stale {
                current: self.generation,
                offered: generation,
            };
        }

        let next = match outcome {
            Ok(payload) => Self {
                form: self.form.cleared(),
                status: RequestStatus::Succeeded(payload),
                generation: self.generation,
            },
            Err(message) => Self {
                form: self.form.clone(),
                status: RequestStatus::Failed(message),
                generation: self.generation,
            },
        };
        Resolution::Applied(next)
    }

    /// Empties the form, returns to `Idle` and supersedes any in-flight request.
    pub fn clear(&self) -> Self {
        Self {
            form: self.form.cleared(),
            status: RequestStatus::Idle,
            generation: self.generation.next(),
        }
    }

    /// Resets a settled status to `Idle`, keeping the form.
    pub fn reset(&self) -> Result<Self, TransitionError> {
        if !self.kind().is_settled() {
            return Err(TransitionError::new(self.kind(), StatusKind::Idle));
        }
        self.kind().transition_to(StatusKind::Idle)?;
        Ok(Self {
            form: self.form.clone(),
            status: RequestStatus::Idle,
            generation: self.generation,
        })
    }

    fn idle_for_new_attempt(&self) -> Result<Self, TransitionError> {
        match self.kind() {
            StatusKind::Idle => Ok(self.clone()),
            StatusKind::Succeeded | StatusKind::Failed => self.reset(),
            StatusKind::Pending => Err(TransitionError::new(
                StatusKind::Pending,
                StatusKind::Pending,
            )),
        }
    }
}
