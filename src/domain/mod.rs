//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (codes, timestamps, state machine, errors)
//! - `game` - Game session aggregate, scoring and events

pub mod foundation;
pub mod game;
