//! SetSecretCodeHandler - Command handler for the code maker's secret.

use std::sync::Arc;

use crate::domain::foundation::GameCode;
use crate::domain::game::{DigitCode, GameError, GameEvent, GamePhase};
use crate::ports::{GameBroadcaster, SessionRegistry};

use super::find_game;

/// Command to set the secret code of a game in SETUP.
///
/// The digits arrive unvalidated; they are checked before the game is touched.
#[derive(Debug, Clone)]
pub struct SetSecretCodeCommand {
    pub code: GameCode,
    pub secret_code: Vec<i64>,
}

/// Handler for setting the secret code.
pub struct SetSecretCodeHandler {
    registry: Arc<dyn SessionRegistry>,
    broadcaster: Arc<dyn GameBroadcaster>,
}

impl SetSecretCodeHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, broadcaster: Arc<dyn GameBroadcaster>) -> Self {
        Self {
            registry,
            broadcaster,
        }
    }

    pub async fn handle(&self, cmd: SetSecretCodeCommand) -> Result<GamePhase, GameError> {
        let game = find_game(self.registry.as_ref(), &cmd.code).await?;
        let secret = DigitCode::parse("secretCode", &cmd.secret_code)?;

        let mut game = game.lock().await;
        let phase = game.set_secret_code(secret)?;
        tracing::info!(game = %cmd.code, phase = %phase, "Secret code set");

        self.broadcaster
            .publish(&cmd.code, GameEvent::SecretCodeSet { phase })
            .await;
        Ok(phase)
    }
}
