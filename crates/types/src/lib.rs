//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they are usable
//! from the engine core, the terminal frontend, and tests alike.
//!
//! # Board Dimensions
//!
//! The board size is chosen at engine construction time. The classic
//! playfield (and the default for the bundled binary) is:
//!
//! - **Width**: 10 columns
//! - **Height**: 20 rows
//!
//! Coordinates are `(x, y)` with `x` growing rightward and `y` growing
//! downward; row 0 is the top of the board. Cells may sit above the board
//! (`y < 0`) while a piece is falling, so coordinates are signed (`i8`).
//!
//! # Host Timing Constants
//!
//! Timing values are in milliseconds and belong to the host loop, not the
//! engine (the engine has no clock):
//!
//! - `BASE_TICK_MS`: 400 - baseline gravity cadence
//! - `SOFT_DROP_DIVISOR`: 10 - soft drop runs at `BASE_TICK_MS / 10`
//! - `SOFT_DROP_REVERT_MS`: 200 - cadence reverts this long after the last
//!   soft-drop key press

/// Default board dimensions for the bundled terminal binary.
pub const DEFAULT_WIDTH: u8 = 10;
pub const DEFAULT_HEIGHT: u8 = 20;

/// Host loop timing (milliseconds).
pub const BASE_TICK_MS: u64 = 400;
pub const SOFT_DROP_DIVISOR: u64 = 10;
pub const SOFT_DROP_REVERT_MS: u64 = 200;

/// State of a single board cell.
///
/// The board and the drawn snapshot are both plain occupancy grids; there
/// is no per-cell piece identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Inactive,
    Active,
}

impl CellState {
    pub fn is_active(self) -> bool {
        matches!(self, CellState::Active)
    }
}

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in a fixed order usable for indexed draws.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Advance one rotation step clockwise.
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Horizontal shift direction for the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta applied by a shift in this direction.
    pub fn dx(self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Actions the host input layer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    ShiftLeft,
    ShiftRight,
    Rotate,
    SoftDrop,
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cycles_back_to_north() {
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::North);
    }

    #[test]
    fn test_direction_deltas() {
        assert_eq!(Direction::Left.dx(), -1);
        assert_eq!(Direction::Right.dx(), 1);
    }

    #[test]
    fn test_cell_state_default_is_inactive() {
        assert_eq!(CellState::default(), CellState::Inactive);
        assert!(!CellState::Inactive.is_active());
        assert!(CellState::Active.is_active());
    }

    #[test]
    fn test_all_kinds_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in PieceKind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
