//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the engine's frame snapshot is
//! painted into a styled-glyph framebuffer which is then flushed to the
//! terminal in one write per frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable (no I/O leaks inward)
//! - Precise control over aspect ratio (2 glyphs wide per board cell)

pub mod fb;
pub mod game_view;
pub mod screen;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use screen::{encode_frame_into, Screen};
