//! Controller-level errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, TransitionError};
use crate::ports::{ClipboardError, SpeechError};

/// Errors returned by controller operations.
///
/// Submission failures are not errors at this level: they are recorded in the
/// lifecycle status and reported through `SubmitOutcome`. These are the
/// failures of the operation call itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error("{0} is not supported on this platform")]
    CapabilityUnavailable(&'static str),

    #[error("{0} is already in progress")]
    Busy(&'static str),

    /// The form was cleared while the operation was running; its result was dropped.
    #[error("{0} was superseded by a clear")]
    Superseded(&'static str),

    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    #[error(transparent)]
    Speech(#[from] SpeechError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl ControllerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ControllerError::CapabilityUnavailable(_) => ErrorCode::CapabilityUnavailable,
            ControllerError::Busy(_)
            | ControllerError::Superseded(_)
            | ControllerError::InvalidTransition(_) => {
                ErrorCode::InvalidStateTransition
            }
            ControllerError::Speech(_) => ErrorCode::SpeechFailed,
            ControllerError::Clipboard(_) => ErrorCode::ClipboardFailed,
        }
    }
}
