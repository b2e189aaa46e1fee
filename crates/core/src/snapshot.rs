//! Snapshot module - the drawn frame handed to renderers
//!
//! A [`FrameSnapshot`] is the merged, read-only view of one frame: locked
//! board cells plus the active piece's footprint, one [`CellState`] per
//! board cell in row-major order. It is produced on demand by the engine's
//! draw path and holds no references into engine state, so hosts may keep
//! it across frames and refill it in place.

use crate::types::CellState;

/// Row-major grid of cell states for one rendered frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot {
    width: u8,
    height: u8,
    cells: Vec<CellState>,
}

impl FrameSnapshot {
    /// Create an all-`Inactive` snapshot of the given size.
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Inactive; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at (x, y); `None` out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<CellState> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some(self.cells[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Reset to all-`Inactive`, adopting a (possibly different) size while
    /// reusing the allocation when it already matches.
    pub(crate) fn reset(&mut self, width: u8, height: u8) {
        let len = width as usize * height as usize;
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(len, CellState::Inactive);
    }

    pub(crate) fn set(&mut self, x: i8, y: i8, cell: CellState) {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return;
        }
        self.cells[(y as usize) * (self.width as usize) + (x as usize)] = cell;
    }

    /// Copy the locked-cell grid wholesale.
    pub(crate) fn copy_from(&mut self, cells: &[CellState]) {
        self.cells.copy_from_slice(cells);
    }
}
