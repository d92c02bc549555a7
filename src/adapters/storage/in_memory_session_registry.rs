//! In-Memory Session Registry Adapter
//!
//! Holds every live game in a process-local map. Games are lost on restart.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::GameCode;
use crate::domain::game::{GameSession, GameSettings};
use crate::ports::{SessionRegistry, SharedGame};

/// In-memory registry of game sessions.
///
/// The map lock is held only for lookup, insert and remove; game mutations
/// happen under each game's own mutex.
#[derive(Debug)]
pub struct InMemorySessionRegistry {
    games: RwLock<HashMap<GameCode, SharedGame>>,
    rng: std::sync::Mutex<StdRng>,
}

impl InMemorySessionRegistry {
    /// Create an empty registry with an entropy-seeded code generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty registry with a deterministic code sequence (for tests).
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            rng: std::sync::Mutex::new(rng),
        }
    }

    fn unused_code(&self, taken: &HashMap<GameCode, SharedGame>) -> GameCode {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        loop {
            let code = GameCode::generate(&mut *rng);
            if !taken.contains_key(&code) {
                return code;
            }
            tracing::debug!(code = %code, "Game code collision, regenerating");
        }
    }
}

impl Default for InMemorySessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn create(&self, settings: GameSettings) -> GameCode {
        let mut games = self.games.write().await;
        let code = self.unused_code(&games);
        games.insert(
            code,
            Arc::new(Mutex::new(GameSession::new(code, settings))),
        );
        code
    }

    async fn find(&self, code: &GameCode) -> Option<SharedGame> {
        self.games.read().await.get(code).cloned()
    }

    async fn delete(&self, code: &GameCode) -> bool {
        self.games.write().await.remove(code).is_some()
    }

    async fn count(&self) -> usize {
        self.games.read().await.len()
    }
}
