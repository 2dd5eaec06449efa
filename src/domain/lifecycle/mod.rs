//! Lifecycle module - the per-form request state machine.
//!
//! Shared by the question and signup flows.

mod aggregate;
mod form_state;
mod request_status;

pub use aggregate::{Lifecycle, Resolution, SubmissionTicket};
pub use form_state::FormState;
pub use request_status::RequestStatus;
