//! Storage adapters.
//!
//! - `InMemorySessionRegistry` - Process-local game registry

mod in_memory_session_registry;

pub use in_memory_session_registry::InMemorySessionRegistry;
