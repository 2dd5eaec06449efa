//! Shared lifecycle storage for controllers.
//!
//! Wraps the lifecycle value in a lock that is only ever held for a single
//! synchronous swap, never across an `.await`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::foundation::{ErrorCode, Generation, StatusKind, TransitionError, ValidationError};
use crate::domain::lifecycle::{FormState, Lifecycle, RequestStatus, Resolution, SubmissionTicket};

/// What happened to one submit or retry trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; no request was made.
    Rejected(ValidationError),
    /// A request was already in flight; the trigger was dropped.
    Ignored,
    /// The request succeeded and its result was applied.
    Succeeded,
    /// The request failed; the surfaced message was applied.
    Failed(String),
    /// The request resolved after being superseded; its result was discarded.
    Superseded,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded)
    }

    /// Error category for outcomes that put the form into `Failed`.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            SubmitOutcome::Rejected(_) => Some(ErrorCode::ValidationFailed),
            SubmitOutcome::Failed(_) => Some(ErrorCode::TransportFailed),
            _ => None,
        }
    }
}

/// Result of admitting a trigger into the lifecycle.
pub(crate) enum Admission<T> {
    Accepted(SubmissionTicket, T),
    Finished(SubmitOutcome),
}

pub(crate) struct LifecycleCell<P> {
    state: Mutex<Lifecycle<P>>,
}

impl<P: Clone> LifecycleCell<P> {
    pub(crate) fn new(form: FormState) -> Self {
        Self {
            state: Mutex::new(Lifecycle::new(form)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Lifecycle<P>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn snapshot(&self) -> Lifecycle<P> {
        self.lock().clone()
    }

    pub(crate) fn form(&self) -> FormState {
        self.lock().form().clone()
    }

    pub(crate) fn status(&self) -> RequestStatus<P> {
        self.lock().status().clone()
    }

    pub(crate) fn kind(&self) -> StatusKind {
        self.lock().kind()
    }

    pub(crate) fn edit(&self, field: &str, value: impl Into<String>) {
        let mut state = self.lock();
        *state = state.edit(field, value);
    }

    pub(crate) fn generation(&self) -> Generation {
        self.lock().generation()
    }

    /// Edits a field only if no clear or new request happened since
    /// `generation` was read. Returns whether the edit was applied.
    pub(crate) fn edit_if_current(
        &self,
        generation: Generation,
        field: &str,
        value: impl Into<String>,
    ) -> bool {
        let mut state = self.lock();
        if state.generation() != generation {
            return false;
        }
        *state = state.edit(field, value);
        true
    }

    pub(crate) fn clear(&self) -> Generation {
        let mut state = self.lock();
        *state = state.clear();
        debug!(generation = %state.generation(), "Form cleared");
        state.generation()
    }

    /// Validates the live form and either records the rejection or moves to
    /// `Pending`.
    ///
    /// With `require` set, the trigger is refused unless the status is in that
    /// state (retry only makes sense from `Failed`).
    pub(crate) fn admit<T, F>(
        &self,
        require: Option<StatusKind>,
        validate: F,
    ) -> Result<Admission<T>, TransitionError>
    where
        F: FnOnce(&FormState) -> Result<T, ValidationError>,
    {
        let mut state = self.lock();

        if state.kind().is_pending() {
            debug!(generation = %state.generation(), "Request already pending, trigger ignored");
            return Ok(Admission::Finished(SubmitOutcome::Ignored));
        }
        if let Some(required) = require {
            if state.kind() != required {
                return Err(TransitionError::new(state.kind(), StatusKind::Pending));
            }
        }

        match validate(state.form()) {
            Err(error) => {
                *state = state.reject(&error)?;
                debug!(field = error.field(), "Submission rejected by validation");
                Ok(Admission::Finished(SubmitOutcome::Rejected(error)))
            }
            Ok(validated) => {
                let (next, ticket) = state.begin()?;
                *state = next;
                debug!(
                    generation = %ticket.generation,
                    request_id = %ticket.request_id,
                    "Request pending"
                );
                Ok(Admission::Accepted(ticket, validated))
            }
        }
    }

    /// Applies a resolved result if it still belongs to the current request.
    pub(crate) fn settle(&self, generation: Generation, outcome: Result<P, String>) -> Resolution<()> {
        let mut state = self.lock();
        match state.resolve(generation, outcome) {
            Resolution::Applied(next) => {
                *state = next;
                Resolution::Applied(())
            }
            Resolution::Stale { current, offered } => Resolution::Stale { current, offered },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell() -> LifecycleCell<u32> {
        LifecycleCell::new(FormState::with_fields(["value"]))
    }

    fn non_empty(form: &FormState) -> Result<String, ValidationError> {
        let value = form.get("value");
        if value.is_empty() {
            Err(ValidationError::empty_field("value", "required"))
        } else {
            Ok(value.to_string())
        }
    }

    #[test]
    fn invalid_form_is_rejected_without_ticket() {
        let cell = cell();
        match cell.admit(None, non_empty).unwrap() {
            Admission::Finished(SubmitOutcome::Rejected(err)) => assert_eq!(err.message(), "required"),
            _ => panic!("expected rejection"),
        }
        assert_eq!(cell.kind(), StatusKind::Failed);
    }

    #[test]
    fn second_trigger_while_pending_is_ignored() {
        let cell = cell();
        cell.edit("value", "x");
        assert!(matches!(cell.admit(None, non_empty).unwrap(), Admission::Accepted(..)));
        assert!(matches!(
            cell.admit(None, non_empty).unwrap(),
            Admission::Finished(SubmitOutcome::Ignored)
        ));
    }

    #[test]
    fn required_state_is_enforced() {
        let cell = cell();
        cell.edit("value", "x");
        assert!(cell.admit(Some(StatusKind::Failed), non_empty).is_err());
        assert_eq!(cell.kind(), StatusKind::Idle);
    }

    #[test]
    fn settle_after_clear_is_stale() {
        let cell = cell();
        cell.edit("value", "x");
        let ticket = match cell.admit(None, non_empty).unwrap() {
            Admission::Accepted(ticket, _) => ticket,
            Admission::Finished(other) => panic!("unexpected {:?}", other),
        };
        cell.clear();

        assert!(cell.settle(ticket.generation, Ok(1)).is_stale());
        assert_eq!(cell.kind(), StatusKind::Idle);
        assert!(cell.form().is_blank());
    }

    #[test]
    fn edit_after_clear_is_dropped() {
        let cell = cell();
        let generation = cell.generation();
        cell.clear();

        assert!(!cell.edit_if_current(generation, "value", "late"));
        assert!(cell.form().is_blank());
        assert!(cell.edit_if_current(cell.generation(), "value", "fresh"));
        assert_eq!(cell.form().get("value"), "fresh");
    }

    #[test]
    fn outcome_codes() {
        assert_eq!(SubmitOutcome::Failed("x".into()).error_code(), Some(ErrorCode::TransportFailed));
        assert_eq!(SubmitOutcome::Succeeded.error_code(), None);
    }
}
