//! RequestHintHandler - Command handler that reveals one secret digit.

use std::sync::Arc;

use crate::domain::foundation::GameCode;
use crate::domain::game::{GameError, GameEvent, Hint};
use crate::ports::{GameBroadcaster, SessionRegistry};

use super::find_game;

/// Command to request a hint.
#[derive(Debug, Clone)]
pub struct RequestHintCommand {
    pub code: GameCode,
}

/// Handler for hints.
///
/// A spent budget is reported as `NoHintAvailable` so callers can tell it
/// apart from a success.
pub struct RequestHintHandler {
    registry: Arc<dyn SessionRegistry>,
    broadcaster: Arc<dyn GameBroadcaster>,
}

impl RequestHintHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, broadcaster: Arc<dyn GameBroadcaster>) -> Self {
        Self {
            registry,
            broadcaster,
        }
    }

    pub async fn handle(&self, cmd: RequestHintCommand) -> Result<Hint, GameError> {
        let game = find_game(self.registry.as_ref(), &cmd.code).await?;

        let mut game = game.lock().await;
        let hint = game.use_hint()?.ok_or(GameError::NoHintAvailable)?;
        tracing::info!(
            game = %cmd.code,
            position = hint.position,
            hints_remaining = hint.hints_remaining,
            "Hint revealed"
        );

        self.broadcaster
            .publish(&cmd.code, GameEvent::HintUsed { hint })
            .await;
        Ok(hint)
    }
}
