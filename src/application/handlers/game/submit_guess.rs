//! SubmitGuessHandler - Command handler for the code breaker's guesses.

use std::sync::Arc;

use crate::domain::foundation::GameCode;
use crate::domain::game::{DigitCode, GameError, GameEvent, GamePhase, Guess};
use crate::ports::{GameBroadcaster, SessionRegistry};

use super::find_game;

/// Command to submit one guess.
#[derive(Debug, Clone)]
pub struct SubmitGuessCommand {
    pub code: GameCode,
    pub guess: Vec<i64>,
}

/// Result of a scored guess.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitGuessResult {
    pub guess: Guess,
    pub phase: GamePhase,
    pub is_victory: Option<bool>,
}

/// Handler for submitting guesses.
pub struct SubmitGuessHandler {
    registry: Arc<dyn SessionRegistry>,
    broadcaster: Arc<dyn GameBroadcaster>,
}

impl SubmitGuessHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, broadcaster: Arc<dyn GameBroadcaster>) -> Self {
        Self {
            registry,
            broadcaster,
        }
    }

    pub async fn handle(&self, cmd: SubmitGuessCommand) -> Result<SubmitGuessResult, GameError> {
        let game = find_game(self.registry.as_ref(), &cmd.code).await?;
        let guess = DigitCode::parse("guess", &cmd.guess)?;

        let mut game = game.lock().await;
        let guess = game.submit_guess(guess)?;
        let result = SubmitGuessResult {
            guess,
            phase: game.phase(),
            is_victory: game.is_victory(),
        };

        tracing::info!(
            game = %cmd.code,
            attempt = result.guess.id,
            well_placed = result.guess.well_placed,
            misplaced = result.guess.misplaced,
            "Guess scored"
        );
        if let Some(victory) = result.is_victory {
            tracing::info!(game = %cmd.code, victory, "Game over");
        }

        self.broadcaster
            .publish(
                &cmd.code,
                GameEvent::GuessSubmitted {
                    guess: result.guess.clone(),
                    phase: result.phase,
                    is_victory: result.is_victory,
                },
            )
            .await;
        Ok(result)
    }
}
