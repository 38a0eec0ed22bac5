//! Overlap correction on the integer grid
//!
//! Blocks are committed one at a time in input order. A block that would land
//! on cells already owned by an earlier block moves to the first free window of
//! its own size, scanning rows top to bottom and columns left to right. Sizes
//! never change, so a block with no free window keeps its place and is reported.

use crate::spatial::block::LayoutBlock;
use crate::spatial::grid::OwnershipGrid;

/// Blocks after correction plus the ones that could not be placed
#[derive(Debug, Clone, Default)]
pub struct Validated {
    /// Corrected blocks in input order
    pub blocks: Vec<LayoutBlock>,
    /// Indices into `blocks` of blocks left overlapping an earlier block
    pub unresolved: Vec<usize>,
    /// Indices into `blocks` of blocks that were moved
    pub relocated: Vec<usize>,
}

impl Validated {
    /// Whether every block found a conflict-free position
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Resolve overlaps and clamp every block to a `width` x `height` canvas
///
/// Block identity, size and relative order are preserved; only `x` and `y`
/// move.
pub fn validate_and_fix(blocks: &[LayoutBlock], width: usize, height: usize) -> Validated {
    let mut grid = OwnershipGrid::new(width, height);
    tracing::debug!(
        blocks = blocks.len(),
        bytes = grid.storage_bytes(),
        "allocated ownership grid"
    );
    let mut validated = Validated {
        blocks: Vec::with_capacity(blocks.len()),
        ..Validated::default()
    };

    for (index, block) in blocks.iter().enumerate() {
        let mut corrected = block.clone();

        if grid.any_owned(corrected.x, corrected.y, corrected.w, corrected.h) {
            if let Some((x, y)) = grid.first_free_window(corrected.w, corrected.h) {
                tracing::debug!(
                    slot = %corrected.id,
                    from_x = corrected.x,
                    from_y = corrected.y,
                    to_x = x,
                    to_y = y,
                    "relocated overlapping block"
                );
                corrected.x = x;
                corrected.y = y;
                validated.relocated.push(index);
            } else {
                tracing::error!(
                    slot = %corrected.id,
                    x = corrected.x,
                    y = corrected.y,
                    w = corrected.w,
                    h = corrected.h,
                    "no free window for block; keeping overlapping position"
                );
                validated.unresolved.push(index);
            }
        }

        grid.claim(corrected.x, corrected.y, corrected.w, corrected.h, index);
        corrected.clamp_to(width, height);
        validated.blocks.push(corrected);
    }

    validated
}

/// Whether any two blocks share a cell
pub fn has_overlaps(blocks: &[LayoutBlock]) -> bool {
    blocks
        .iter()
        .enumerate()
        .any(|(i, a)| blocks.iter().skip(i + 1).any(|b| a.overlaps(b)))
}
