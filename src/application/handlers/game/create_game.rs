//! CreateGameHandler - Command handler for starting a new game.

use std::sync::Arc;

use crate::domain::foundation::GameCode;
use crate::domain::game::GameSettings;
use crate::ports::SessionRegistry;

/// Result of successful game creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGameResult {
    pub code: GameCode,
}

/// Handler for creating games.
///
/// Every game it creates uses the settings the server was configured with.
pub struct CreateGameHandler {
    registry: Arc<dyn SessionRegistry>,
    settings: GameSettings,
}

impl CreateGameHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, settings: GameSettings) -> Self {
        Self { registry, settings }
    }

    pub async fn handle(&self) -> CreateGameResult {
        let code = self.registry.create(self.settings).await;
        tracing::info!(
            game = %code,
            max_hints = self.settings.max_hints(),
            time_limit_secs = ?self.settings.time_limit_secs(),
            "Game created"
        );
        CreateGameResult { code }
    }
}
