//! Mock adapters for testing.
//!
//! Configurable in-memory implementations of every port, so controllers can
//! be exercised without a server or a browser.
//!
//! - `MockQueryApi`, `MockAuthApi` - queued responses, gates, call recording
//! - `MockSpeechRecognizer`, `MockClipboard` - platform capabilities
//! - `RecordingNotifier`, `RecordingNavigator` - side-effect sinks

mod auth_api;
mod platform;
mod query_api;

pub use auth_api::MockAuthApi;
pub use platform::{
    MockClipboard, MockSpeechRecognizer, RecordingNavigator, RecordingNotifier,
};
pub use query_api::MockQueryApi;
