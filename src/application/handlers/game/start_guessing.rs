//! StartGuessingHandler - Command handler that hands the game to the breaker.

use std::sync::Arc;

use crate::domain::foundation::GameCode;
use crate::domain::game::{GameError, GameEvent, GamePhase};
use crate::ports::{GameBroadcaster, SessionRegistry};

use super::find_game;

/// Command to move a game from TRANSITION to GUESSING.
#[derive(Debug, Clone)]
pub struct StartGuessingCommand {
    pub code: GameCode,
}

/// Handler for starting the guessing phase. Starts the timer.
pub struct StartGuessingHandler {
    registry: Arc<dyn SessionRegistry>,
    broadcaster: Arc<dyn GameBroadcaster>,
}

impl StartGuessingHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, broadcaster: Arc<dyn GameBroadcaster>) -> Self {
        Self {
            registry,
            broadcaster,
        }
    }

    pub async fn handle(&self, cmd: StartGuessingCommand) -> Result<GamePhase, GameError> {
        let game = find_game(self.registry.as_ref(), &cmd.code).await?;

        let mut game = game.lock().await;
        let phase = game.start_guessing()?;
        tracing::info!(game = %cmd.code, "Guessing started");

        self.broadcaster
            .publish(&cmd.code, GameEvent::GuessingStarted { phase })
            .await;
        Ok(phase)
    }
}
