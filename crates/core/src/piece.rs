//! Piece module - tetromino shapes and the active falling piece
//!
//! Shapes are 4 mino offsets from the piece anchor, a pure function of
//! `(kind, rotation)`. The `Tetromino` value type produces candidate
//! positions (`shifted`, `descended`, `rotated`); whether a candidate is
//! accepted is the engine's decision, made through a board fit check.
//! Rotation is a plain one-step advance with no wall-kick offset testing:
//! if the rotated footprint collides, the rotation is simply rejected.

use crate::board::Board;
use crate::types::{Direction, PieceKind, Rotation};

/// Offset of a single mino relative to the piece anchor.
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the piece anchor.
pub type PieceShape = [MinoOffset; 4];

/// Get the shape (mino offsets) for a piece kind and rotation.
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => i_shape(rotation),
        PieceKind::O => o_shape(rotation),
        PieceKind::T => t_shape(rotation),
        PieceKind::S => s_shape(rotation),
        PieceKind::Z => z_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::L => l_shape(rotation),
    }
}

fn i_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

/// O occupies the same cells in every orientation.
fn o_shape(_rotation: Rotation) -> PieceShape {
    [(1, 0), (2, 0), (1, 1), (2, 1)]
}

fn t_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn s_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn z_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn j_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn l_shape(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a piece at the spawn position for the given board width:
    /// horizontally centered on the 4-cell shape box, anchored at the top
    /// row, North orientation.
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: (board_width as i8 - 4) / 2,
            y: 0,
        }
    }

    /// Get the shape (mino offsets) for the current rotation.
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// The four absolute board cells this piece occupies.
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut out = self.shape();
        for (dx, dy) in &mut out {
            *dx += self.x;
            *dy += self.y;
        }
        out
    }

    /// Check that every occupied cell is open on the board.
    pub fn fits(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| board.is_open(x, y))
    }

    /// Candidate piece one column to the side.
    pub fn shifted(&self, direction: Direction) -> Self {
        Self {
            x: self.x + direction.dx(),
            ..*self
        }
    }

    /// Candidate piece one row down.
    pub fn descended(&self) -> Self {
        Self {
            y: self.y + 1,
            ..*self
        }
    }

    /// Candidate piece advanced one rotation step.
    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}
