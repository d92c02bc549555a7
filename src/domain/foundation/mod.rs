//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, the state machine trait and error
//! types that form the vocabulary of the code breaker domain.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{GameCode, GAME_CODE_LENGTH};
pub use state_machine::{InvalidTransition, StateMachine};
pub use timestamp::Timestamp;
