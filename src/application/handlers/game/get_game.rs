//! GetGameHandler - Query handler for a game's public state.

use std::sync::Arc;

use crate::domain::foundation::GameCode;
use crate::domain::game::{GameError, GameSnapshot};
use crate::ports::SessionRegistry;

use super::find_game;

/// Query to fetch a game snapshot.
#[derive(Debug, Clone)]
pub struct GetGameQuery {
    pub code: GameCode,
}

/// Handler for reading a game. The snapshot never includes the secret.
pub struct GetGameHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl GetGameHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, query: GetGameQuery) -> Result<GameSnapshot, GameError> {
        let game = find_game(self.registry.as_ref(), &query.code).await?;
        let snapshot = game.lock().await.snapshot();
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::game::test_support::{guessing_game, registry, unknown_code};
    use crate::domain::game::{GamePhase, GameSettings, MAX_ATTEMPTS};

    #[tokio::test]
    async fn returns_snapshot_for_new_game() {
        let registry = registry();
        let code = registry.create(GameSettings::default()).await;
        let handler = GetGameHandler::new(registry);

        let snapshot = handler.handle(GetGameQuery { code }).await.unwrap();

        assert_eq!(snapshot.code, code);
        assert_eq!(snapshot.phase, GamePhase::Setup);
        assert_eq!(snapshot.max_attempts, MAX_ATTEMPTS);
        assert_eq!(snapshot.is_victory, None);
    }

    #[tokio::test]
    async fn reflects_phase_changes() {
        let registry = registry();
        let code = guessing_game(&registry, [1, 2, 3, 4]).await;
        let handler = GetGameHandler::new(registry);

        let snapshot = handler.handle(GetGameQuery { code }).await.unwrap();

        assert_eq!(snapshot.phase, GamePhase::Guessing);
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let handler = GetGameHandler::new(registry());

        let result = handler.handle(GetGameQuery { code: unknown_code() }).await;

        assert_eq!(result, Err(GameError::NotFound(unknown_code())));
    }
}
