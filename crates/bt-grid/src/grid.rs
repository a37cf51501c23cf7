//! Row-major square grid of cells.
//!
//! Heap-backed flat storage sized at configuration time; the flat index
//! order IS the row-major scan order the relocation policy is defined in,
//! so the engine works directly on flat indices.

use bt_core::{BtError, BtResult, Cell, CellCounts, Style};

/// Square matrix of [`Cell`]s of side `dimension`, stored as one flat
/// `Vec` in row-major order.
#[derive(Clone, Debug)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Lay a shuffled pool out row-major.  Placement order is exactly the
    /// pool order; no randomness is introduced here.
    pub fn from_pool(dimension: usize, cells: Vec<Cell>) -> BtResult<Self> {
        let expected = dimension * dimension;
        if cells.len() != expected {
            return Err(BtError::GridShape { expected, got: cells.len() });
        }
        Ok(Self { dimension, cells })
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.dimension && col < self.dimension);
        row * self.dimension + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let i = self.index(row, col);
        self.cells[i] = cell;
    }

    // ── Flat-index access (row-major scan order) ──────────────────────────

    /// Cell at flat index `i`.
    #[inline]
    pub fn cell(&self, i: usize) -> Cell {
        self.cells[i]
    }

    #[inline]
    pub fn set_cell(&mut self, i: usize, cell: Cell) {
        self.cells[i] = cell;
    }

    /// Flat index of the first vacant cell scanning from the top-left, or
    /// `None` when the grid has no vacancy.
    pub fn first_vacancy(&self) -> Option<usize> {
        self.cells.iter().position(|c| c.is_vacant())
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom; each item is one row of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dimension)
    }

    /// Tally the current multiset of cell values.
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts {
            total: self.cells.len(),
            vacant: 0,
            endline: 0,
            newline: 0,
        };
        for cell in &self.cells {
            match cell.style() {
                None => counts.vacant += 1,
                Some(Style::Endline) => counts.endline += 1,
                Some(Style::Newline) => counts.newline += 1,
            }
        }
        counts
    }
}
