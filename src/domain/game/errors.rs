//! Game-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, GameCode, ValidationError};

use super::GamePhase;

/// Errors returned by game operations.
///
/// A rejected operation never changes the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No live game has this code.
    #[error("Game not found: {0}")]
    NotFound(GameCode),

    /// Operation attempted outside the phase it requires.
    #[error("Operation requires {expected} phase, game is in {actual}")]
    InvalidPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    /// Guessing without a secret; unreachable while phase invariants hold.
    #[error("Secret code not set")]
    SecretCodeNotSet,

    /// Malformed secret code or guess.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Hint budget exhausted or every position already revealed.
    #[error("No hints remaining or all positions already revealed")]
    NoHintAvailable,
}

impl GameError {
    pub fn not_found(code: GameCode) -> Self {
        GameError::NotFound(code)
    }

    pub fn invalid_phase(expected: GamePhase, actual: GamePhase) -> Self {
        GameError::InvalidPhase { expected, actual }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            GameError::NotFound(_) => ErrorCode::GameNotFound,
            GameError::InvalidPhase { .. } => ErrorCode::InvalidPhase,
            GameError::SecretCodeNotSet => ErrorCode::SecretCodeNotSet,
            GameError::Validation(_) => ErrorCode::ValidationFailed,
            GameError::NoHintAvailable => ErrorCode::NoHintAvailable,
        }
    }
}
