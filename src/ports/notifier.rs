//! Notifier Port - blocking user alerts.

/// Port for alerts the user must acknowledge (capability problems,
/// dictation failures, copy confirmations).
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
