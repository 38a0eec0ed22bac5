//! Per-cell ownership of the integer canvas
//!
//! Backs the validation pass: each cell records the index of the block that
//! claimed it last. Stored row-major, indexed `[row, col]`, as the owner index
//! plus one so an unowned cell costs four bytes.

use ndarray::Array2;
use std::mem::size_of;
use std::num::NonZeroU32;
use std::ops::Range;

type Cell = Option<NonZeroU32>;

/// Canvas-sized grid of optional block owners
#[derive(Debug, Clone)]
pub struct OwnershipGrid {
    cells: Array2<Cell>,
}

impl OwnershipGrid {
    /// Create an empty grid of `width` columns and `height` rows
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), None),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Owner of a cell, `None` when unowned or outside the grid
    pub fn owner(&self, x: usize, y: usize) -> Option<usize> {
        self.cells
            .get([y, x])
            .copied()
            .flatten()
            .map(|stored| stored.get() as usize - 1)
    }

    /// Whether any in-bounds cell of the window is owned
    ///
    /// Cells outside the grid are ignored.
    pub fn any_owned(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        let (mut rows, cols) = self.window_spans(x, y, w, h);
        rows.any(|row| cols.clone().any(|col| self.owner(col, row).is_some()))
    }

    /// Whether the window lies inside the grid with every cell unowned
    pub fn is_window_free(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        x + w <= self.width() && y + h <= self.height() && !self.any_owned(x, y, w, h)
    }

    /// First fully free `w` x `h` window in row-major order
    ///
    /// Scans top rows first and, within a row, left columns first. Returns the
    /// window origin as `(x, y)`.
    pub fn first_free_window(&self, w: usize, h: usize) -> Option<(usize, usize)> {
        if w == 0 || h == 0 || w > self.width() || h > self.height() {
            return None;
        }

        (0..=self.height() - h).find_map(|y| {
            (0..=self.width() - w)
                .find(|&x| self.is_window_free(x, y, w, h))
                .map(|x| (x, y))
        })
    }

    /// Record `owner` for every in-bounds cell of the window
    ///
    /// Owners past `u32::MAX - 1` are recorded as `u32::MAX - 1`.
    pub fn claim(&mut self, x: usize, y: usize, w: usize, h: usize, owner: usize) {
        let stored = u32::try_from(owner)
            .ok()
            .and_then(|owner| owner.checked_add(1))
            .and_then(NonZeroU32::new)
            .unwrap_or(NonZeroU32::MAX);
        let (rows, cols) = self.window_spans(x, y, w, h);
        for row in rows {
            for col in cols.clone() {
                if let Some(cell) = self.cells.get_mut([row, col]) {
                    *cell = Some(stored);
                }
            }
        }
    }

    // Row and column ranges of the window, clipped to the grid
    fn window_spans(&self, x: usize, y: usize, w: usize, h: usize) -> (Range<usize>, Range<usize>) {
        let rows = y.min(self.height())..y.saturating_add(h).min(self.height());
        let cols = x.min(self.width())..x.saturating_add(w).min(self.width());
        (rows, cols)
    }

    /// Number of owned cells
    pub fn owned_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Bytes held by the cell storage
    pub fn storage_bytes(&self) -> usize {
        self.cells.len() * size_of::<Cell>()
    }
}
