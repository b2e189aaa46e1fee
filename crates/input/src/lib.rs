//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values the
//! run loop feeds to the engine. Auto-repeat is left to the terminal; there
//! is no DAS/ARR layer in this host contract.

pub mod map;

pub use gridfall_types as types;

pub use map::{handle_key_event, should_quit};
