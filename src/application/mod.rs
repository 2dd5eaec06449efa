//! Application layer - controllers driving the request lifecycle.
//!
//! Controllers coordinate domain transitions with the collaborator ports.
//! One controller instance owns one form.

mod error;
mod lifecycle_cell;
mod query_controller;
mod signup_controller;

pub use error::ControllerError;
pub use lifecycle_cell::SubmitOutcome;
pub use query_controller::{
    QueryController, QueryControllerConfig, COPIED_MESSAGE, QUERY_ERROR_KEY,
    QUERY_FALLBACK_MESSAGE, SPEECH_UNAVAILABLE_MESSAGE,
};
pub use signup_controller::{
    SignupController, SignupControllerConfig, SIGNUP_ERROR_KEY, SIGNUP_FALLBACK_MESSAGE,
};
