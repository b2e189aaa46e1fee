//! Engine module - the complete falling-block game state machine
//!
//! The engine owns the board, the shape source, and a phase: either a
//! piece is falling (`Playing`) or the game has ended (`GameOver`). The
//! phase is a tagged enum rather than a flag so a terminal engine has no
//! active piece to move - `shift`, `rotate` and `tick` cannot touch state
//! that no longer exists.
//!
//! Time advances only through [`Engine::tick`]; the engine has no clock
//! and no notion of cadence. The host decides when to call it.

use crate::board::{Board, SizeError};
use crate::piece::Tetromino;
use crate::snapshot::FrameSnapshot;
use crate::source::{NextShapeSource, RandomShapes};
use crate::types::{CellState, Direction};

/// What a single gravity step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The active piece moved down one row.
    Descended,
    /// The piece locked; full rows were cleared and a new piece spawned.
    Locked { lines_cleared: u32 },
    /// The engine is in (or just entered) the terminal state.
    GameOver,
}

impl TickOutcome {
    /// False once the engine has reached the terminal state.
    pub fn still_playing(self) -> bool {
        !matches!(self, TickOutcome::GameOver)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Playing(Tetromino),
    GameOver,
}

/// The game engine: one board, one active piece (while playing), one
/// shape source.
pub struct Engine {
    board: Board,
    shapes: Box<dyn NextShapeSource>,
    phase: Phase,
}

impl Engine {
    /// Create an engine with an empty board and a freshly spawned piece
    /// drawn from `shapes`.
    ///
    /// Fails on zero or oversized dimensions. On a board too narrow to
    /// admit any piece the first spawn collides and the engine starts in
    /// the terminal state, mirroring the in-game "board full" condition.
    pub fn new(
        width: u8,
        height: u8,
        mut shapes: Box<dyn NextShapeSource>,
    ) -> Result<Self, SizeError> {
        let board = Board::new(width, height)?;
        let piece = Tetromino::spawn(shapes.next_shape(), width);
        let phase = if piece.fits(&board) {
            Phase::Playing(piece)
        } else {
            Phase::GameOver
        };
        Ok(Self {
            board,
            shapes,
            phase,
        })
    }

    /// Convenience constructor using the seeded uniform random source.
    pub fn with_seed(width: u8, height: u8, seed: u32) -> Result<Self, SizeError> {
        Self::new(width, height, Box::new(RandomShapes::new(seed)))
    }

    pub fn width(&self) -> u8 {
        self.board.width()
    }

    pub fn height(&self) -> u8 {
        self.board.height()
    }

    /// The locked-cell grid (no active piece merged in).
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The falling piece, if the game is still running.
    pub fn active(&self) -> Option<Tetromino> {
        match self.phase {
            Phase::Playing(piece) => Some(piece),
            Phase::GameOver => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }

    /// Advance game time one step.
    ///
    /// While playing: descend the piece if the row below is free;
    /// otherwise lock it, clear every full row in one pass, and spawn the
    /// next piece. A spawn that collides with locked cells ends the game.
    /// In the terminal state this is a no-op.
    pub fn tick(&mut self) -> TickOutcome {
        let Phase::Playing(piece) = self.phase else {
            return TickOutcome::GameOver;
        };

        let candidate = piece.descended();
        if candidate.fits(&self.board) {
            self.phase = Phase::Playing(candidate);
            return TickOutcome::Descended;
        }

        // Grounded: lock the piece where it is. A footprint still
        // overhanging the top cannot lock and ends the game.
        if !self.board.lock_cells(&piece.shape(), piece.x, piece.y) {
            self.phase = Phase::GameOver;
            return TickOutcome::GameOver;
        }

        let lines_cleared = self.board.clear_full_rows().len() as u32;

        let spawned = Tetromino::spawn(self.shapes.next_shape(), self.board.width());
        if spawned.fits(&self.board) {
            self.phase = Phase::Playing(spawned);
            TickOutcome::Locked { lines_cleared }
        } else {
            self.phase = Phase::GameOver;
            TickOutcome::GameOver
        }
    }

    /// Try a one-cell horizontal move. Returns whether it was applied;
    /// a rejected shift leaves the piece untouched.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let Phase::Playing(piece) = self.phase else {
            return false;
        };

        let candidate = piece.shifted(direction);
        if candidate.fits(&self.board) {
            self.phase = Phase::Playing(candidate);
            true
        } else {
            false
        }
    }

    /// Try to advance the piece one rotation step about its anchor.
    /// Returns whether it was applied; no offset positions are probed on
    /// collision - the rotation is simply rejected.
    pub fn rotate(&mut self) -> bool {
        let Phase::Playing(piece) = self.phase else {
            return false;
        };

        let candidate = piece.rotated();
        if candidate.fits(&self.board) {
            self.phase = Phase::Playing(candidate);
            true
        } else {
            false
        }
    }

    /// Write the current frame into `out`: locked cells merged with the
    /// active piece's footprint. Cells of a piece overhanging the top are
    /// simply not visible. Valid in every phase, any number of times.
    pub fn draw_into(&self, out: &mut FrameSnapshot) {
        out.reset(self.board.width(), self.board.height());
        out.copy_from(self.board.cells());

        if let Phase::Playing(piece) = self.phase {
            for (x, y) in piece.cells() {
                out.set(x, y, CellState::Active);
            }
        }
    }

    /// Allocating convenience wrapper around [`Engine::draw_into`].
    pub fn draw(&self) -> FrameSnapshot {
        let mut snap = FrameSnapshot::new(self.board.width(), self.board.height());
        self.draw_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SequenceShapes;
    use crate::types::PieceKind;

    fn engine_with(width: u8, height: u8, order: &[PieceKind]) -> Engine {
        Engine::new(width, height, Box::new(SequenceShapes::new(order))).unwrap()
    }

    #[test]
    fn test_new_engine_spawns_a_piece() {
        let engine = engine_with(10, 20, &[PieceKind::T]);
        let piece = engine.active().unwrap();
        assert_eq!(piece.kind, PieceKind::T);
        assert_eq!(piece.x, 3);
        assert_eq!(piece.y, 0);
        assert!(!engine.is_game_over());
    }

    #[test]
    fn test_new_engine_rejects_bad_dimensions() {
        assert!(Engine::with_seed(0, 20, 1).is_err());
        assert!(Engine::with_seed(10, 0, 1).is_err());
    }

    #[test]
    fn test_tick_descends() {
        let mut engine = engine_with(10, 20, &[PieceKind::O]);
        let y0 = engine.active().unwrap().y;
        assert_eq!(engine.tick(), TickOutcome::Descended);
        assert_eq!(engine.active().unwrap().y, y0 + 1);
    }

    #[test]
    fn test_tick_locks_on_floor_and_spawns() {
        let mut engine = engine_with(10, 20, &[PieceKind::O]);

        // O at North occupies dy 0..=1; from y=0 it can descend 18 times.
        for _ in 0..18 {
            assert_eq!(engine.tick(), TickOutcome::Descended);
        }
        assert_eq!(engine.tick(), TickOutcome::Locked { lines_cleared: 0 });

        // Footprint locked at the bottom two rows, new piece at spawn.
        assert!(engine.board().is_occupied(4, 18));
        assert!(engine.board().is_occupied(5, 19));
        assert_eq!(engine.active().unwrap().y, 0);
    }

    #[test]
    fn test_shift_moves_and_rejects_at_wall() {
        let mut engine = engine_with(10, 20, &[PieceKind::O]);
        let x0 = engine.active().unwrap().x;

        assert!(engine.shift(Direction::Left));
        assert_eq!(engine.active().unwrap().x, x0 - 1);

        // O's minos sit at dx 1..=2; the wall stops the anchor at x=-1.
        let mut moved = 0;
        while engine.shift(Direction::Left) {
            moved += 1;
        }
        assert_eq!(engine.active().unwrap().x, -1);
        let before = engine.active().unwrap();
        assert!(!engine.shift(Direction::Left));
        assert_eq!(engine.active().unwrap(), before);
        assert!(moved <= 4);
    }

    #[test]
    fn test_rotate_applies_and_is_rejected_against_wall() {
        use crate::types::Rotation;

        let mut engine = engine_with(10, 20, &[PieceKind::I]);
        assert!(engine.rotate());
        assert_eq!(engine.active().unwrap().rotation, Rotation::East);

        // Park the vertical I against the left wall; rotating on to South
        // (a horizontal bar) would cross the wall and must be rejected.
        while engine.shift(Direction::Left) {}
        let before = engine.active().unwrap();
        assert_eq!(before.x, -2); // East minos sit at dx=2
        assert!(!engine.rotate());
        assert_eq!(engine.active().unwrap(), before);
    }

    #[test]
    fn test_game_over_when_spawn_blocked() {
        let mut engine = engine_with(10, 6, &[PieceKind::O]);

        // Stack O pieces straight down the spawn column until the fresh
        // spawn has nowhere to go.
        let mut outcome = TickOutcome::Descended;
        for _ in 0..200 {
            outcome = engine.tick();
            if outcome == TickOutcome::GameOver {
                break;
            }
        }
        assert_eq!(outcome, TickOutcome::GameOver);
        assert!(engine.is_game_over());
        assert!(engine.active().is_none());
    }

    #[test]
    fn test_terminal_state_is_inert() {
        let mut engine = engine_with(10, 6, &[PieceKind::O]);
        while engine.tick().still_playing() {}

        let frozen = engine.draw();
        assert_eq!(engine.tick(), TickOutcome::GameOver);
        assert!(!engine.shift(Direction::Left));
        assert!(!engine.rotate());
        assert_eq!(engine.draw(), frozen);
    }

    #[test]
    fn test_draw_merges_active_piece() {
        let engine = engine_with(10, 20, &[PieceKind::O]);
        let snap = engine.draw();

        for (x, y) in engine.active().unwrap().cells() {
            assert_eq!(snap.get(x, y), Some(CellState::Active));
        }
        // Board itself is still empty.
        assert!(engine.board().cells().iter().all(|c| !c.is_active()));
    }

    #[test]
    fn test_draw_into_reuses_snapshot() {
        let mut engine = engine_with(10, 20, &[PieceKind::T]);
        let mut snap = FrameSnapshot::new(1, 1);
        engine.draw_into(&mut snap);
        assert_eq!(snap.width(), 10);
        assert_eq!(snap.height(), 20);

        engine.tick();
        let again = engine.draw();
        engine.draw_into(&mut snap);
        assert_eq!(snap, again);
    }

    #[test]
    fn test_tiny_board_starts_terminal() {
        let engine = engine_with(2, 2, &[PieceKind::I]);
        assert!(engine.is_game_over());
        assert_eq!(engine.draw().cells().len(), 4);
    }
}
