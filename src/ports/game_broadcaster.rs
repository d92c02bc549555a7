//! GameBroadcaster port - Interface for fanning out game events.
//!
//! Application handlers publish through this port after a successful
//! mutation, without knowing how observers are connected.

use async_trait::async_trait;

use crate::domain::foundation::GameCode;
use crate::domain::game::GameEvent;

/// Port for delivering game events to every observer of a game.
///
/// Implementations must ensure:
/// - Delivery is best-effort per observer; a dead observer is dropped
/// - A slow observer never delays delivery to the others and is dropped
///   rather than left with a gap in its event stream
/// - Publishing never fails, so commands never fail because of delivery
#[async_trait]
pub trait GameBroadcaster: Send + Sync {
    /// Deliver `event` to all current observers of `code`.
    ///
    /// A game with no observers is a no-op.
    async fn publish(&self, code: &GameCode, event: GameEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_broadcaster_is_object_safe() {
        fn _accepts_dyn(_broadcaster: &dyn GameBroadcaster) {}
    }
}
