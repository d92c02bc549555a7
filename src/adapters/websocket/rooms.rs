//! WebSocket room management for game-based message routing.
//!
//! Rooms are keyed by game code, so an event for one game reaches only the
//! observers of that game.
//!
//! # Architecture
//!
//! ```text
//! Room: K3QZ7A         Room: 9PLM2X
//! ├── client-a         ├── client-d
//! ├── client-b         └── client-e
//! └── client-c
//! ```
//!
//! Each observer owns a bounded queue. Publishing copies the room's senders
//! under a read lock, releases the lock, then `try_send`s to each one. An
//! observer that is closed or has fallen a full queue behind is removed from
//! the room; dropping its sender ends its connection so it can reconnect and
//! catch up from a fresh snapshot.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use crate::domain::foundation::GameCode;
use crate::domain::game::GameEvent;
use crate::ports::GameBroadcaster;

/// Unique identifier for a WebSocket client connection.
///
/// Generated server-side when a client connects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Create a new random client ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Room = HashMap<ClientId, mpsc::Sender<GameEvent>>;

/// Manages observers organized by game.
///
/// Provides:
/// - Client join/leave operations
/// - Broadcast to all clients in a game room
/// - Automatic cleanup of empty rooms and closed observers
///
/// # Thread Safety
///
/// Uses `RwLock` for the room registry since broadcasts (reads) vastly
/// outnumber joins/leaves (writes). No lock is held while delivering.
pub struct RoomManager {
    /// Map of game code → observers in that room.
    rooms: RwLock<HashMap<GameCode, Room>>,

    /// Queue capacity for each observer.
    channel_capacity: usize,
}

impl RoomManager {
    /// Create a new room manager with specified per-observer capacity.
    ///
    /// # Arguments
    ///
    /// * `channel_capacity` - Events buffered per observer before it is
    ///   considered too slow and removed. Clamped to at least 1.
    pub fn new(channel_capacity: usize) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            channel_capacity: channel_capacity.max(1),
        }
    }

    /// Create with default capacity (128 messages).
    pub fn with_default_capacity() -> Self {
        Self::new(128)
    }

    /// Join a client to a game room.
    ///
    /// If the room doesn't exist, it's created automatically.
    /// Returns the receiving end of the client's event queue; dropping it
    /// makes the client eligible for removal on the next broadcast.
    pub async fn join(&self, code: &GameCode, client_id: ClientId) -> mpsc::Receiver<GameEvent> {
        let (tx, rx) = mpsc::channel(self.channel_capacity);
        self.rooms
            .write()
            .await
            .entry(*code)
            .or_default()
            .insert(client_id, tx);
        rx
    }

    /// Remove a client from a game room.
    ///
    /// If the room becomes empty, it's removed. Unknown clients are ignored.
    pub async fn leave(&self, code: &GameCode, client_id: &ClientId) {
        let mut rooms = self.rooms.write().await;
        if let Some(room) = rooms.get_mut(code) {
            room.remove(client_id);
            if room.is_empty() {
                rooms.remove(code);
            }
        }
    }

    /// Broadcast an event to all clients in a game room.
    ///
    /// If no clients are in the room, this is a no-op. A client whose queue
    /// is full or whose receiver is gone is removed from the room.
    pub async fn broadcast_to_game(&self, code: &GameCode, event: GameEvent) {
        let observers: Vec<(ClientId, mpsc::Sender<GameEvent>)> = {
            let rooms = self.rooms.read().await;
            match rooms.get(code) {
                Some(room) => room
                    .iter()
                    .map(|(id, tx)| (id.clone(), tx.clone()))
                    .collect(),
                None => return,
            }
        };

        let mut evicted = Vec::new();
        for (client_id, tx) in observers {
            match tx.try_send(event.clone()) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    tracing::warn!(
                        game = %code,
                        client_id = %client_id,
                        event = event.event_type(),
                        "Observer queue full, removing observer"
                    );
                    evicted.push(client_id);
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    tracing::debug!(game = %code, client_id = %client_id, "Removing closed observer");
                    evicted.push(client_id);
                }
            }
        }

        for client_id in evicted {
            self.leave(code, &client_id).await;
        }
    }

    /// Get count of connected clients in a specific room.
    ///
    /// Returns 0 if the room doesn't exist.
    pub async fn client_count(&self, code: &GameCode) -> usize {
        self.rooms
            .read()
            .await
            .get(code)
            .map(HashMap::len)
            .unwrap_or(0)
    }

    /// Get all active room codes (for monitoring/debugging).
    pub async fn active_rooms(&self) -> Vec<GameCode> {
        self.rooms.read().await.keys().copied().collect()
    }

    /// Get total count of connected clients across all rooms.
    pub async fn total_client_count(&self) -> usize {
        self.rooms.read().await.values().map(HashMap::len).sum()
    }
}

impl Default for RoomManager {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[async_trait]
impl GameBroadcaster for RoomManager {
    async fn publish(&self, code: &GameCode, event: GameEvent) {
        self.broadcast_to_game(code, event).await;
    }
}
