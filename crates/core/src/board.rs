//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty, locked with a piece
//! color, or flagged as part of a row being cleared.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::is_filled;
use crate::types::{Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices found full in one tick, in detection order.
pub type LineClearQueue = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Borrow one row of cells.
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = BOARD_WIDTH as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| !cell.is_empty())
    }

    /// Write `Cell::Locked(kind)` under every occupied cell of the rotated shape.
    ///
    /// Cells projecting outside the board are skipped; callers only lock
    /// pieces that passed the collision check.
    pub fn lock_piece(&mut self, kind: PieceKind, x: i8, y: i8, rotation: Rotation) {
        for py in 0..4 {
            for px in 0..4 {
                if is_filled(kind, px, py, rotation) {
                    self.set(x + px as i8, y + py as i8, Cell::Locked(kind));
                }
            }
        }
    }

    /// Flag the full rows a piece at row `piece_y` may have completed.
    ///
    /// Scans the four rows of the piece box from top to bottom, stopping at
    /// the bottom of the board. Every full row is overwritten with
    /// [`Cell::Clearing`] and its index appended to `queue`.
    /// Returns the number of rows found.
    pub fn detect_lines(&mut self, piece_y: i8, queue: &mut LineClearQueue) -> usize {
        let mut found = 0;
        for py in 0..4i8 {
            let y = piece_y + py;
            if y >= BOARD_HEIGHT as i8 {
                break;
            }
            if y < 0 || !self.is_row_full(y as usize) {
                continue;
            }
            let width = BOARD_WIDTH as usize;
            let start = y as usize * width;
            self.cells[start..start + width].fill(Cell::Clearing);
            if queue.try_push(y as usize).is_ok() {
                found += 1;
            }
        }
        found
    }

    /// Remove row `y` and shift all rows above down by one.
    ///
    /// The top row becomes empty.
    pub fn collapse_row(&mut self, y: usize) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(Cell::Empty);
    }

    /// Collapse every queued row in the order it was detected, then drain the
    /// queue. Returns the number of rows collapsed.
    ///
    /// Rows are detected top to bottom and a collapse only moves rows above
    /// the collapsed index, so later queue entries still point at their row.
    pub fn collapse_lines(&mut self, queue: &mut LineClearQueue) -> usize {
        let count = queue.len();
        for &y in queue.iter() {
            self.collapse_row(y);
        }
        queue.clear();
        count
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Export the board as numeric cell codes (`0`, `1..=7`, `127`).
    pub fn write_code_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, c) in dst.iter_mut().zip(src) {
                *d = c.code();
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Fill a whole row with one cell value.
    pub fn fill_row(&mut self, y: usize, cell: Cell) {
        if y < BOARD_HEIGHT as usize {
            let width = BOARD_WIDTH as usize;
            self.cells[y * width..(y + 1) * width].fill(cell);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
