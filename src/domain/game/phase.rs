//! GamePhase enum for the lifecycle of a game session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Stage of a game session.
///
/// ```text
/// SETUP ──set secret──▶ TRANSITION ──start──▶ GUESSING ──win/out of attempts──▶ GAME_OVER
///   ▲                                                                              │
///   └──────────────────────────────── reset (from any phase) ──────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    /// Waiting for the code maker to choose a secret.
    #[default]
    Setup,
    /// Secret chosen; handing the device over to the code breaker.
    Transition,
    /// Guesses are being accepted.
    Guessing,
    /// Solved or out of attempts.
    GameOver,
}

impl GamePhase {
    /// Wire name, as sent to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Setup => "SETUP",
            GamePhase::Transition => "TRANSITION",
            GamePhase::Guessing => "GUESSING",
            GamePhase::GameOver => "GAME_OVER",
        }
    }
}

impl StateMachine for GamePhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use GamePhase::*;
        // Reset back to Setup is legal from anywhere.
        matches!(
            (self, target),
            (_, Setup) | (Setup, Transition) | (Transition, Guessing) | (Guessing, GameOver)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use GamePhase::*;
        match self {
            Setup => vec![Setup, Transition],
            Transition => vec![Setup, Guessing],
            Guessing => vec![Setup, GameOver],
            GameOver => vec![Setup],
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
