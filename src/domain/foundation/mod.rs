//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, the status state machine, and error types
//! that form the vocabulary of the Askboard domain.

mod errors;
mod ids;
mod state_machine;
mod status_kind;

pub use errors::{ErrorCode, TransitionError, ValidationError};
pub use ids::{Generation, RequestId};
pub use state_machine::StateMachine;
pub use status_kind::StatusKind;
