//! Game events - state changes fanned out to every observer of a game.

use super::{GamePhase, Guess, Hint};

/// A successful state change, published after the mutation is applied.
///
/// Events never carry the secret code.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SecretCodeSet {
        phase: GamePhase,
    },
    GuessingStarted {
        phase: GamePhase,
    },
    GuessSubmitted {
        guess: Guess,
        phase: GamePhase,
        is_victory: Option<bool>,
    },
    HintUsed {
        hint: Hint,
    },
    GameReset {
        phase: GamePhase,
    },
}

impl GameEvent {
    /// Wire name of the event, used as the message `type`.
    pub fn event_type(&self) -> &'static str {
        match self {
            GameEvent::SecretCodeSet { .. } => "secret_code_set",
            GameEvent::GuessingStarted { .. } => "guessing_started",
            GameEvent::GuessSubmitted { .. } => "guess_submitted",
            GameEvent::HintUsed { .. } => "hint_used",
            GameEvent::GameReset { .. } => "game_reset",
        }
    }
}
