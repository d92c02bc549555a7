//! WebSocket adapters for real-time game updates.
//!
//! This module pushes game events to every client watching a game.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Application handlers                             │
//! │   set secret │ start guessing │ guess │ hint │ reset                │
//! └─────────────────────────────────────────────────────────────────────┘
//!                                     │
//!                                     │ GameBroadcaster::publish
//!                                     ▼
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      RoomManager                                     │
//! │   Room: K3QZ7A         Room: 9PLM2X         Room: Q0W9E8            │
//! │   ├── client-a         ├── client-d         ├── client-g            │
//! │   ├── client-b         └── client-e         └── client-h            │
//! │   └── client-c                                                       │
//! └─────────────────────────────────────────────────────────────────────┘
//!                                     │
//!                                     │ per-client queue
//!                                     ▼
//!                           WebSocket send task
//! ```
//!
//! # Components
//!
//! - [`messages`] - WebSocket message protocol types
//! - [`rooms`] - Room management and the `GameBroadcaster` implementation
//! - [`handler`] - Axum WebSocket upgrade handler

pub mod handler;
pub mod messages;
pub mod rooms;

pub use handler::{websocket_router, ws_handler, WebSocketState};
pub use messages::{ClientMessage, ConnectedMessage, ErrorMessage, PongMessage, ServerMessage};
pub use rooms::{ClientId, RoomManager};
