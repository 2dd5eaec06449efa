//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the controllers and the outside world. Adapters implement these ports.
//!
//! ## API Ports
//!
//! - `QueryApi` - `POST /query`
//! - `AuthApi` - `POST /auth/register`
//! - `TransportError` - failure shared by both, with server message extraction
//!
//! ## Platform Ports
//!
//! - `SpeechRecognizer` - optional speech-to-text
//! - `Clipboard` - text copy
//! - `Notifier` - blocking alerts
//! - `Navigator` - route changes

mod api_error;
mod auth_api;
mod clipboard;
mod navigator;
mod notifier;
mod query_api;
mod speech_recognizer;

pub use api_error::TransportError;
pub use auth_api::{AuthApi, RegisterRequest};
pub use clipboard::{Clipboard, ClipboardError};
pub use navigator::Navigator;
pub use notifier::Notifier;
pub use query_api::{QueryApi, QueryRequest};
pub use speech_recognizer::{Capability, SpeechError, SpeechRecognizer};
