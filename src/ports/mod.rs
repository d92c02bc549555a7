//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application layer and the outside world. Adapters implement them.
//!
//! - `SessionRegistry` - Owns live game sessions and mints game codes
//! - `GameBroadcaster` - Fans game events out to connected observers

mod game_broadcaster;
mod session_registry;

pub use game_broadcaster::GameBroadcaster;
pub use session_registry::{SessionRegistry, SharedGame};
