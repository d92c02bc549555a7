//! GetTimerHandler - Query handler for elapsed and remaining time.

use std::sync::Arc;

use crate::domain::foundation::{GameCode, Timestamp};
use crate::domain::game::{GameError, TimerStatus};
use crate::ports::SessionRegistry;

use super::find_game;

/// Query for a game's timer.
#[derive(Debug, Clone)]
pub struct GetTimerQuery {
    pub code: GameCode,
}

pub struct GetTimerHandler {
    registry: Arc<dyn SessionRegistry>,
}

impl GetTimerHandler {
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, query: GetTimerQuery) -> Result<TimerStatus, GameError> {
        let game = find_game(self.registry.as_ref(), &query.code).await?;
        let status = game.lock().await.timer_at(Timestamp::now());
        Ok(status)
    }
}
