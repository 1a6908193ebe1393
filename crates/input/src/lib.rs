//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and buffers them
//! between ticks in a fixed-capacity [`CommandQueue`]. Only key presses count;
//! auto-repeat and release events are dropped so every command is
//! edge-triggered.

pub mod map;
pub mod queue;

pub use blockfall_types as types;

pub use map::{is_start_key, map_key};
pub use queue::{CommandQueue, QUEUE_CAPACITY};
