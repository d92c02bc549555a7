//! DeleteGameHandler - Command handler that removes a game.

use std::sync::Arc;

use crate::domain::foundation::GameCode;
use crate::domain::game::GameError;
use crate::ports::SessionRegistry;

/// Command to delete a game.
#[derive(Debug, Clone)]
pub struct DeleteGameCommand {
    pub code: GameCode,
}

/// Handler for deletions. Observers of a deleted game stay subscribed but
/// receive nothing further for it.
pub struct DeleteGameHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl DeleteGameHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, cmd: DeleteGameCommand) -> Result<(), GameError> {
        if !self.registry.delete(&cmd.code).await {
            return Err(GameError::not_found(cmd.code));
        }
        tracing::info!(game = %cmd.code, "Game deleted");
        Ok(())
    }
}
