//! Askboard - request lifecycle controllers for the question and signup forms.
//!
//! Each form owns one lifecycle: field values, a single request status and a
//! generation token that keeps late responses from overwriting newer state.
//! Controllers drive that lifecycle against the API server and the platform
//! collaborators (speech, clipboard, alerts, navigation) through ports.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
