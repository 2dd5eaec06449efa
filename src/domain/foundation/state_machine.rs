//! State machine trait for status enums.
//!
//! Gives status enums a single place to declare their legal transitions and a
//! checked `transition_to` built on top of it.

use super::TransitionError;

/// Trait for status enums that represent state machines.
///
/// ```ignore
/// impl StateMachine for StatusKind {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Idle, Pending) | (Pending, Succeeded) /* ... */)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![Pending, Failed],
///             // ...
///         }
///     }
/// }
///
/// let next = current.transition_to(StatusKind::Pending)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, TransitionError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(TransitionError::new(self, target))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
