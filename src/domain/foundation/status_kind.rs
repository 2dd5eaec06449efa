//! StatusKind enum for the request lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Payload-free discriminant of a request status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl StatusKind {
    /// Returns true while a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, StatusKind::Pending)
    }

    /// Returns true once a request has resolved either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, StatusKind::Succeeded | StatusKind::Failed)
    }
}

impl StateMachine for StatusKind {
    /// Valid transitions:
    /// - Idle -> Pending (submission accepted)
    /// - Idle -> Failed (rejected by local validation)
    /// - Pending -> Succeeded | Failed
    /// - Succeeded | Failed -> Idle (reset)
    /// - Pending -> Idle (clear while in flight)
    fn can_transition_to(&self, target: &Self) -> bool {
        use StatusKind::*;
        matches!(
            (self, target),
            (Idle, Pending)
                | (Idle, Failed)
                | (Pending, Succeeded)
                | (Pending, Failed)
                | (Pending, Idle)
                | (Succeeded, Idle)
                | (Failed, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use StatusKind::*;
        match self {
            Idle => vec![Pending, Failed],
            Pending => vec![Succeeded, Failed, Idle],
            Succeeded => vec![Idle],
            Failed => vec![Idle],
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusKind::Idle => "Idle",
            StatusKind::Pending => "Pending",
            StatusKind::Succeeded => "Succeeded",
            StatusKind::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(StatusKind::default(), StatusKind::Idle);
    }

    #[test]
    fn settled_states_only_reset_to_idle() {
        for settled in [StatusKind::Succeeded, StatusKind::Failed] {
            assert_eq!(settled.valid_transitions(), vec![StatusKind::Idle]);
            assert!(!settled.can_transition_to(&StatusKind::Pending));
        }
    }

    #[test]
    fn idle_cannot_jump_to_succeeded() {
        assert!(StatusKind::Idle.transition_to(StatusKind::Succeeded).is_err());
    }

    #[test]
    fn no_state_is_terminal() {
        for kind in [
            StatusKind::Idle,
            StatusKind::Pending,
            StatusKind::Succeeded,
            StatusKind::Failed,
        ] {
            assert!(!kind.is_terminal());
        }
    }
}
