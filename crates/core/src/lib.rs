//! Core game logic - pure, deterministic, and testable
//!
//! This crate is the falling-block engine: board state, collision, piece
//! movement and rotation, locking, line clears, spawning, and game-over
//! detection. It has **zero dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: the same shape source produces identical games
//! - **Testable**: every rule is exercised without a terminal attached
//! - **Portable**: any host loop (terminal, GUI, headless) can drive it
//!
//! # Module Structure
//!
//! - [`board`]: dynamic-size grid with collision queries and line clearing
//! - [`piece`]: tetromino shape tables and the active-piece value type
//! - [`source`]: pluggable next-shape selection (seeded random, sequence)
//! - [`engine`]: the state machine tying the above together
//! - [`snapshot`]: the merged frame view handed to renderers
//!
//! # Game Rules
//!
//! - Gravity advances only on [`Engine::tick`]; the host owns all timing.
//! - Shifts and rotations are rejected silently on collision; rotation
//!   probes no wall-kick offsets.
//! - All full rows clear in one pass after a lock, rows above compacting
//!   down in order.
//! - The game ends exactly when a freshly spawned piece collides with
//!   locked cells; from then on the engine only answers `draw`.
//!
//! # Example
//!
//! ```
//! use gridfall_core::Engine;
//! use gridfall_core::types::Direction;
//!
//! let mut engine = Engine::with_seed(10, 20, 12345).unwrap();
//! engine.shift(Direction::Left);
//! engine.rotate();
//! while engine.tick().still_playing() {}
//! let final_frame = engine.draw();
//! assert_eq!(final_frame.cells().len(), 10 * 20);
//! ```

pub mod board;
pub mod engine;
pub mod piece;
pub mod snapshot;
pub mod source;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, SizeError, MAX_DIM};
pub use engine::{Engine, TickOutcome};
pub use piece::{get_shape, PieceShape, Tetromino};
pub use snapshot::FrameSnapshot;
pub use source::{LcgRng, NextShapeSource, RandomShapes, SequenceShapes};
