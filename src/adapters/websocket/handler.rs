//! WebSocket upgrade handler for real-time game connections.
//!
//! Handles the HTTP → WebSocket upgrade and manages the connection lifecycle:
//! 1. Validate the game code format
//! 2. Upgrade to WebSocket
//! 3. Join the game room and, if the game exists, send a snapshot taken atomically with the join
//! 4. Forward room events and answer client messages until disconnect
//! 5. Clean up room membership

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures::{stream::SplitSink, SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::domain::foundation::{ErrorCode, GameCode};
use crate::domain::game::{GameEvent, GameSnapshot};
use crate::ports::SessionRegistry;

use super::{
    messages::{ClientMessage, ConnectedMessage, ServerMessage},
    rooms::{ClientId, RoomManager},
};

/// Direct replies (pong, state) queued per connection.
const REPLY_CAPACITY: usize = 16;

/// State required for WebSocket handling.
#[derive(Clone)]
pub struct WebSocketState {
    /// Room manager for game-based routing.
    pub room_manager: Arc<RoomManager>,
    /// Registry used for state snapshots.
    pub registry: Arc<dyn SessionRegistry>,
}

impl WebSocketState {
    /// Create a new WebSocket state.
    pub fn new(room_manager: Arc<RoomManager>, registry: Arc<dyn SessionRegistry>) -> Self {
        Self {
            room_manager,
            registry,
        }
    }

    async fn snapshot(&self, code: &GameCode) -> Option<GameSnapshot> {
        let game = self.registry.find(code).await?;
        let snapshot = game.lock().await.snapshot();
        Some(snapshot)
    }

    /// Joins the game's room and takes the connect snapshot.
    ///
    /// Both happen under the game lock, and events are published under that
    /// same lock, so every mutation shows up exactly once: either in the
    /// snapshot or as a queued event.
    async fn subscribe(
        &self,
        code: &GameCode,
        client_id: ClientId,
    ) -> (mpsc::Receiver<GameEvent>, Option<GameSnapshot>) {
        match self.registry.find(code).await {
            Some(game) => {
                let game = game.lock().await;
                let room_rx = self.room_manager.join(code, client_id).await;
                (room_rx, Some(game.snapshot()))
            }
            None => (self.room_manager.join(code, client_id).await, None),
        }
    }
}

/// Handle WebSocket upgrade requests for a game.
///
/// Route: `GET /ws/:code`
///
/// Observers may subscribe before the game exists; they simply receive no
/// snapshot until they ask for one.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Path(code): Path<String>,
    State(state): State<WebSocketState>,
) -> Response {
    let code: GameCode = match code.parse() {
        Ok(code) => code,
        Err(_) => return (StatusCode::BAD_REQUEST, "Invalid game code").into_response(),
    };

    ws.on_upgrade(move |socket| handle_socket(socket, code, state))
}

/// Handle an established WebSocket connection.
///
/// This function runs for the lifetime of the connection.
async fn handle_socket(socket: WebSocket, code: GameCode, state: WebSocketState) {
    let (mut sender, mut receiver) = socket.split();
    let client_id = ClientId::new();

    let (mut room_rx, snapshot) = state.subscribe(&code, client_id.clone()).await;
    tracing::debug!(game = %code, client_id = %client_id, "Observer connected");

    if let Some(snapshot) = snapshot {
        let connected = ServerMessage::Connected(ConnectedMessage::from(snapshot));
        if let Err(e) = send_message(&mut sender, &connected).await {
            tracing::debug!("Failed to send connected message: {}", e);
            state.room_manager.leave(&code, &client_id).await;
            return;
        }
    }

    let (reply_tx, mut reply_rx) = mpsc::channel::<ServerMessage>(REPLY_CAPACITY);

    // Forward room events and direct replies to the client
    let mut send_task = {
        let client_id = client_id.clone();
        tokio::spawn(async move {
            loop {
                let msg = tokio::select! {
                    event = room_rx.recv() => match event {
                        Some(event) => ServerMessage::from(event),
                        None => break,
                    },
                    reply = reply_rx.recv() => match reply {
                        Some(reply) => reply,
                        None => break,
                    },
                };
                if let Err(e) = send_message(&mut sender, &msg).await {
                    tracing::debug!(
                        client_id = %client_id,
                        "Send error, closing connection: {}",
                        e
                    );
                    break;
                }
            }
        })
    };

    // Handle incoming messages from client
    let mut recv_task = {
        let client_id = client_id.clone();
        let state = state.clone();
        tokio::spawn(async move {
            while let Some(result) = receiver.next().await {
                match result {
                    Ok(Message::Text(text)) => {
                        let reply = match serde_json::from_str::<ClientMessage>(&text) {
                            Ok(ClientMessage::Ping) => {
                                tracing::trace!(client_id = %client_id, "Received ping");
                                ServerMessage::pong()
                            }
                            Ok(ClientMessage::RequestState) => match state.snapshot(&code).await {
                                Some(snapshot) => {
                                    ServerMessage::Connected(ConnectedMessage::from(snapshot))
                                }
                                None => ServerMessage::error(
                                    ErrorCode::GameNotFound.to_string(),
                                    format!("Game not found: {}", code),
                                ),
                            },
                            Err(_) => {
                                tracing::debug!(
                                    client_id = %client_id,
                                    "Ignoring unrecognized client message"
                                );
                                continue;
                            }
                        };
                        if reply_tx.send(reply).await.is_err() {
                            break;
                        }
                    }
                    Ok(Message::Binary(_)) => {
                        tracing::warn!(
                            client_id = %client_id,
                            "Received unsupported binary message"
                        );
                    }
                    Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {
                        // Protocol-level heartbeats are answered by axum
                    }
                    Ok(Message::Close(_)) => {
                        tracing::debug!(client_id = %client_id, "Client sent close frame");
                        break;
                    }
                    Err(e) => {
                        tracing::debug!(client_id = %client_id, "Receive error: {}", e);
                        break;
                    }
                }
            }
        })
    };

    // Wait for either task to finish
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    state.room_manager.leave(&code, &client_id).await;
    tracing::debug!(game = %code, client_id = %client_id, "Observer disconnected");
}

/// Send a JSON message over the WebSocket.
async fn send_message(
    sender: &mut SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    sender.send(Message::Text(json)).await
}

/// Create axum router for the WebSocket endpoint.
pub fn websocket_router() -> axum::Router<WebSocketState> {
    use axum::routing::get;

    axum::Router::new().route("/ws/:code", get(ws_handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionRegistry;
    use crate::application::{SubmitGuessCommand, SubmitGuessHandler};
    use crate::domain::game::{DigitCode, GamePhase, GameSettings};

    fn state() -> WebSocketState {
        WebSocketState::new(
            Arc::new(RoomManager::default()),
            Arc::new(InMemorySessionRegistry::new()),
        )
    }

    #[test]
    fn websocket_state_shares_room_manager() {
        let room_manager = Arc::new(RoomManager::default());
        let state = WebSocketState::new(
            room_manager.clone(),
            Arc::new(InMemorySessionRegistry::new()),
        );
        assert!(Arc::ptr_eq(&state.room_manager, &room_manager));
    }

    #[tokio::test]
    async fn snapshot_is_none_for_unknown_game() {
        let state = state();
        assert!(state.snapshot(&"ZZZZZZ".parse().unwrap()).await.is_none());
    }

    #[tokio::test]
    async fn snapshot_reflects_live_game() {
        let state = state();
        let code = state.registry.create(GameSettings::default()).await;

        let snapshot = state.snapshot(&code).await.unwrap();
        assert_eq!(snapshot.code, code);
        assert_eq!(snapshot.phase, GamePhase::Setup);
    }

    #[tokio::test]
    async fn subscribe_without_game_joins_room_with_no_snapshot() {
        let state = state();
        let code: GameCode = "ZZZZZZ".parse().unwrap();

        let (_rx, snapshot) = state.subscribe(&code, ClientId::new()).await;

        assert!(snapshot.is_none());
        assert_eq!(state.room_manager.client_count(&code).await, 1);
    }

    #[tokio::test]
    async fn connect_snapshot_and_queued_events_never_overlap() {
        let state = state();
        let code = state.registry.create(GameSettings::default()).await;
        {
            let game = state.registry.find(&code).await.unwrap();
            let mut game = game.lock().await;
            game.set_secret_code(DigitCode::new([1, 2, 3, 4]).unwrap())
                .unwrap();
            game.start_guessing().unwrap();
        }

        let guesses = SubmitGuessHandler::new(state.registry.clone(), state.room_manager.clone());
        let writer = tokio::spawn(async move {
            for _ in 0..5 {
                guesses
                    .handle(SubmitGuessCommand {
                        code,
                        guess: vec![0, 0, 0, 0],
                    })
                    .await
                    .unwrap();
                tokio::task::yield_now().await;
            }
        });
        tokio::task::yield_now().await;

        let (mut room_rx, snapshot) = state.subscribe(&code, ClientId::new()).await;
        writer.await.unwrap();

        // Queued events pick up exactly where the snapshot left off.
        let mut next_id = snapshot.unwrap().guesses.len() as u32 + 1;
        while let Ok(event) = room_rx.try_recv() {
            match event {
                GameEvent::GuessSubmitted { guess, .. } => {
                    assert_eq!(guess.id, next_id);
                    next_id += 1;
                }
                other => panic!("unexpected event {:?}", other),
            }
        }
        assert_eq!(next_id, 6);
    }

    #[test]
    fn websocket_router_creates_route() {
        let _router = websocket_router();
    }
}
