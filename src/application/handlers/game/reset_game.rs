//! ResetGameHandler - Command handler that returns a game to SETUP.

use std::sync::Arc;

use crate::domain::foundation::GameCode;
use crate::domain::game::{GameError, GameEvent, GamePhase};
use crate::ports::{GameBroadcaster, SessionRegistry};

use super::find_game;

/// Command to reset a game. Valid from any phase.
#[derive(Debug, Clone)]
pub struct ResetGameCommand {
    pub code: GameCode,
}

/// Handler for resets. The code and settings survive; everything else is cleared.
pub struct ResetGameHandler {
    registry: Arc<dyn SessionRegistry>,
    broadcaster: Arc<dyn GameBroadcaster>,
}

impl ResetGameHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>, broadcaster: Arc<dyn GameBroadcaster>) -> Self {
        Self {
            registry,
            broadcaster,
        }
    }

    pub async fn handle(&self, cmd: ResetGameCommand) -> Result<GamePhase, GameError> {
        let game = find_game(self.registry.as_ref(), &cmd.code).await?;

        let mut game = game.lock().await;
        let previous = game.phase();
        let phase = game.reset();
        tracing::info!(game = %cmd.code, from = %previous, "Game reset");

        self.broadcaster
            .publish(&cmd.code, GameEvent::GameReset { phase })
            .await;
        Ok(phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::game::test_support::{
        guessing_game, registry, unknown_code, RecordingBroadcaster,
    };
    use crate::domain::foundation::Timestamp;
    use crate::domain::game::DigitCode;

    #[tokio::test]
    async fn clears_progress_and_publishes() {
        let registry = registry();
        let broadcaster = Arc::new(RecordingBroadcaster::default());
        let code = guessing_game(&registry, [1, 2, 3, 4]).await;
        {
            let game = registry.find(&code).await.unwrap();
            let mut game = game.lock().await;
            game.submit_guess(DigitCode::new([4, 3, 2, 1]).unwrap())
                .unwrap();
            game.use_hint().unwrap();
        }
        let handler = ResetGameHandler::new(registry.clone(), broadcaster.clone());

        let phase = handler.handle(ResetGameCommand { code }).await.unwrap();

        assert_eq!(phase, GamePhase::Setup);
        let game = registry.find(&code).await.unwrap();
        let game = game.lock().await;
        assert_eq!(game.code(), &code);
        assert!(game.guesses().is_empty());
        assert_eq!(game.hints_used(), 0);
        assert!(game.timer_at(Timestamp::now()).elapsed_time.is_none());
        assert_eq!(
            broadcaster.events(),
            vec![(
                code,
                GameEvent::GameReset {
                    phase: GamePhase::Setup
                }
            )]
        );
    }

    #[tokio::test]
    async fn reset_of_fresh_game_is_allowed() {
        let registry = registry();
        let code = registry
            .create(crate::domain::game::GameSettings::default())
            .await;
        let handler = ResetGameHandler::new(registry, Arc::new(RecordingBroadcaster::default()));

        assert_eq!(
            handler.handle(ResetGameCommand { code }).await,
            Ok(GamePhase::Setup)
        );
    }

    #[tokio::test]
    async fn unknown_game_is_not_found() {
        let handler =
            ResetGameHandler::new(registry(), Arc::new(RecordingBroadcaster::default()));

        let result = handler
            .handle(ResetGameCommand {
                code: unknown_code(),
            })
            .await;

        assert_eq!(result, Err(GameError::NotFound(unknown_code())));
    }
}
