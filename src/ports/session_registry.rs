//! SessionRegistry port - Ownership of live game sessions.
//!
//! The registry is the only place a [`GameCode`] is minted and the only
//! owner of session lifetime. State is process-local and volatile.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::foundation::GameCode;
use crate::domain::game::{GameSession, GameSettings};

/// A live game behind its own lock.
///
/// Every mutation of one game is serialized through this mutex; different
/// games never contend with each other.
pub type SharedGame = Arc<Mutex<GameSession>>;

/// Registry of live game sessions keyed by code.
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Create a game in SETUP under a fresh code unique among live games.
    async fn create(&self, settings: GameSettings) -> GameCode;

    /// Look up a live game.
    ///
    /// Returns `None` if no game has this code.
    async fn find(&self, code: &GameCode) -> Option<SharedGame>;

    /// Remove a game.
    ///
    /// Returns `false` if the code was not present; removing twice is harmless.
    async fn delete(&self, code: &GameCode) -> bool;

    /// Number of live games.
    async fn count(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_registry_is_object_safe() {
        fn _accepts_dyn(_registry: &dyn SessionRegistry) {}
    }
}
