//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `storage` - In-memory session registry
//! - `websocket` - Observer rooms and the WebSocket endpoint
//! - `http` - REST routes and the application router

pub mod http;
pub mod storage;
pub mod websocket;

pub use http::{app_router, GameHandlers};
pub use storage::InMemorySessionRegistry;
pub use websocket::{RoomManager, WebSocketState};
