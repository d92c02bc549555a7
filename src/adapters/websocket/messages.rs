//! WebSocket message types for real-time game updates.
//!
//! Defines the protocol between server and connected clients:
//! - Server → Client: Connection snapshot, game events, errors, pongs
//! - Client → Server: Pings, state requests

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GameCode, Timestamp};
use crate::domain::game::{GameEvent, GamePhase, GameSnapshot, Guess, Hint};

// ============================================
// Server → Client Messages
// ============================================

/// All message types that can be sent from server to client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Point-in-time game state, sent on connect and on request.
    Connected(ConnectedMessage),

    SecretCodeSet(PhaseMessage),
    GuessingStarted(PhaseMessage),
    GuessSubmitted(GuessSubmittedMessage),
    HintUsed(HintUsedMessage),
    GameReset(PhaseMessage),

    /// Error occurred.
    Error(ErrorMessage),

    /// Heartbeat response.
    Pong(PongMessage),
}

/// Snapshot of public game state. Never includes the secret code.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedMessage {
    pub code: GameCode,
    pub phase: GamePhase,
    pub guesses: Vec<Guess>,
    pub max_attempts: usize,
    pub is_victory: Option<bool>,
}

impl From<GameSnapshot> for ConnectedMessage {
    fn from(snapshot: GameSnapshot) -> Self {
        Self {
            code: snapshot.code,
            phase: snapshot.phase,
            guesses: snapshot.guesses,
            max_attempts: snapshot.max_attempts,
            is_victory: snapshot.is_victory,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseMessage {
    pub phase: GamePhase,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessSubmittedMessage {
    pub guess: Guess,
    pub phase: GamePhase,
    pub is_victory: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HintUsedMessage {
    pub hint: Hint,
}

/// Error message sent to client.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMessage {
    pub code: String,
    pub message: String,
    pub timestamp: String,
}

/// Heartbeat response.
#[derive(Debug, Clone, Serialize)]
pub struct PongMessage {
    pub timestamp: String,
}

impl ServerMessage {
    pub fn pong() -> Self {
        ServerMessage::Pong(PongMessage {
            timestamp: Timestamp::now().as_datetime().to_rfc3339(),
        })
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        ServerMessage::Error(ErrorMessage {
            code: code.into(),
            message: message.into(),
            timestamp: Timestamp::now().as_datetime().to_rfc3339(),
        })
    }
}

impl From<GameEvent> for ServerMessage {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::SecretCodeSet { phase } => ServerMessage::SecretCodeSet(PhaseMessage { phase }),
            GameEvent::GuessingStarted { phase } => {
                ServerMessage::GuessingStarted(PhaseMessage { phase })
            }
            GameEvent::GuessSubmitted {
                guess,
                phase,
                is_victory,
            } => ServerMessage::GuessSubmitted(GuessSubmittedMessage {
                guess,
                phase,
                is_victory,
            }),
            GameEvent::HintUsed { hint } => ServerMessage::HintUsed(HintUsedMessage { hint }),
            GameEvent::GameReset { phase } => ServerMessage::GameReset(PhaseMessage { phase }),
        }
    }
}

// ============================================
// Client → Server Messages
// ============================================

/// All message types that can be received from client.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Heartbeat request.
    Ping,

    /// Request a fresh snapshot (after reconnection).
    RequestState,
}
