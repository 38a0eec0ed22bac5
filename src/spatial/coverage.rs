//! Cell-level audit of a finished layout

use crate::spatial::block::LayoutBlock;
use bitvec::prelude::*;
use std::fmt;

/// How a block list covers a `width` x `height` canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    /// Canvas width in cells
    pub width: usize,
    /// Canvas height in cells
    pub height: usize,
    /// Cells covered by at least one block
    pub covered_cells: usize,
    /// Cells covered by two or more blocks
    pub overlapping_cells: usize,
    /// Indices of blocks that are empty or extend past the canvas
    pub out_of_bounds: Vec<usize>,
}

impl CoverageReport {
    /// Measure coverage of the canvas by `blocks`
    ///
    /// Cells of out-of-bounds blocks that fall inside the canvas still count.
    pub fn measure(blocks: &[LayoutBlock], width: usize, height: usize) -> Self {
        let cell_count = width * height;
        let mut covered = bitvec![0; cell_count];
        let mut overlapping = bitvec![0; cell_count];
        let mut out_of_bounds = Vec::new();

        for (index, block) in blocks.iter().enumerate() {
            if !block.fits_within(width, height) {
                out_of_bounds.push(index);
            }

            for row in block.y..block.bottom().min(height) {
                for col in block.x..block.right().min(width) {
                    let cell = row * width + col;
                    if covered.get(cell).as_deref() == Some(&true) {
                        overlapping.set(cell, true);
                    } else {
                        covered.set(cell, true);
                    }
                }
            }
        }

        Self {
            width,
            height,
            covered_cells: covered.count_ones(),
            overlapping_cells: overlapping.count_ones(),
            out_of_bounds,
        }
    }

    /// Cells no block covers
    pub const fn uncovered_cells(&self) -> usize {
        self.width * self.height - self.covered_cells
    }

    /// Whether every cell is covered by exactly one in-bounds block
    pub fn is_exact_tiling(&self) -> bool {
        self.uncovered_cells() == 0 && self.overlapping_cells == 0 && self.out_of_bounds.is_empty()
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CoverageReport({}x{}: {} covered, {} uncovered, {} overlapping, {} out of bounds)",
            self.width,
            self.height,
            self.covered_cells,
            self.uncovered_cells(),
            self.overlapping_cells,
            self.out_of_bounds.len()
        )
    }
}
