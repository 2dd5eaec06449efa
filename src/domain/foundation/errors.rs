//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Local, pre-flight form validation failures.
///
/// The display string is the user-facing message rendered in the error
/// banner; the field name is kept for callers that want to focus the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message}")]
    EmptyField { field: String, message: String },

    #[error("{message}")]
    TooShort {
        field: String,
        min: usize,
        actual: usize,
        message: String,
    },

    #[error("{message}")]
    InvalidFormat { field: String, message: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a minimum length validation error.
    pub fn too_short(
        field: impl Into<String>,
        min: usize,
        actual: usize,
        message: impl Into<String>,
    ) -> Self {
        ValidationError::TooShort {
            field: field.into(),
            min,
            actual,
            message: message.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending form field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field, .. }
            | ValidationError::TooShort { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }

    /// User-facing message.
    pub fn message(&self) -> &str {
        match self {
            ValidationError::EmptyField { message, .. }
            | ValidationError::TooShort { message, .. }
            | ValidationError::InvalidFormat { message, .. } => message,
        }
    }
}

/// A state transition the lifecycle rules do not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot transition from {from} to {to}")]
pub struct TransitionError {
    pub from: String,
    pub to: String,
}

impl TransitionError {
    pub fn new(from: impl fmt::Debug, to: impl fmt::Debug) -> Self {
        Self {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Local errors
    ValidationFailed,
    InvalidStateTransition,

    // Collaborator errors
    TransportFailed,
    CapabilityUnavailable,
    SpeechFailed,
    ClipboardFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::TransportFailed => "TRANSPORT_FAILED",
            ErrorCode::CapabilityUnavailable => "CAPABILITY_UNAVAILABLE",
            ErrorCode::SpeechFailed => "SPEECH_FAILED",
            ErrorCode::ClipboardFailed => "CLIPBOARD_FAILED",
        };
        write!(f, "{}", s)
    }
}
