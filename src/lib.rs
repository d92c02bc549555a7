//! Code Breaker - real-time multiplayer code guessing server.
//!
//! One player sets a secret four-digit code, another guesses it with
//! well-placed/misplaced feedback, and every connected observer of the game
//! is kept in sync over WebSocket.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
