//! State machine trait for lifecycle enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions, so aggregates never assign a phase directly.

use std::fmt::Debug;

use thiserror::Error;

/// Rejected transition between two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Cannot transition from {from:?} to {to:?}")]
pub struct InvalidTransition<S: Debug> {
    pub from: S,
    pub to: S,
}

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for GamePhase {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Setup, Transition) | (Transition, Guessing) | ...)
///     }
///     // ...
/// }
///
/// let next = phase.transition_to(GamePhase::Guessing)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, InvalidTransition<Self>> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(InvalidTransition {
                from: *self,
                to: target,
            })
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
