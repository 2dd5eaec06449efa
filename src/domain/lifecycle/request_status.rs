//! Request status carrying the outcome payload.

use crate::domain::foundation::StatusKind;

/// Status of the single request a form owns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus<P> {
    #[default]
    Idle,
    Pending,
    Succeeded(P),
    Failed(String),
}

impl<P> RequestStatus<P> {
    /// Returns the payload-free discriminant.
    pub fn kind(&self) -> StatusKind {
        match self {
            RequestStatus::Idle => StatusKind::Idle,
            RequestStatus::Pending => StatusKind::Pending,
            RequestStatus::Succeeded(_) => StatusKind::Succeeded,
            RequestStatus::Failed(_) => StatusKind::Failed,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }

    /// Returns the success payload, if any.
    pub fn payload(&self) -> Option<&P> {
        match self {
            RequestStatus::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

    /// Returns the surfaced error message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
