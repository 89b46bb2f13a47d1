//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Decoding
//! stops here: the core consumes discrete actions and never sees device
//! state. There is no auto-repeat handling; the game acts on key presses.

pub mod map;

pub use map::{handle_key_event, should_quit};
