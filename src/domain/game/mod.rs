//! Game domain module.
//!
//! A game is a four-digit code breaking match: the code maker sets a secret,
//! the code breaker guesses, and every guess is scored as well-placed and
//! misplaced digits.
//!
//! # Events
//!
//! - `SecretCodeSet` - Secret chosen, game in TRANSITION
//! - `GuessingStarted` - Guessing opened and timer started
//! - `GuessSubmitted` - A guess was scored (may end the game)
//! - `HintUsed` - One secret digit was revealed
//! - `GameReset` - Game returned to SETUP

mod digits;
mod errors;
mod events;
mod phase;
mod scoring;
mod session;

pub use digits::{DigitCode, CODE_LENGTH, MAX_DIGIT};
pub use errors::GameError;
pub use events::GameEvent;
pub use phase::GamePhase;
pub use scoring::{score, Score};
pub use session::{
    GameSession, GameSettings, GameSnapshot, Guess, Hint, TimerStatus, DEFAULT_MAX_HINTS,
    MAX_ATTEMPTS,
};
