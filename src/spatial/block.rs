//! Integer grid blocks, the unit of generated output

use crate::io::configuration::PLACEHOLDER_COLOR;
use serde::{Deserialize, Serialize};

/// One slot placed on the integer grid
///
/// Serialized as `{ "id", "x", "y", "w", "h", "color" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutBlock {
    /// Slot identifier
    pub id: String,
    /// Left column
    pub x: usize,
    /// Top row
    pub y: usize,
    /// Width in cells
    pub w: usize,
    /// Height in cells
    pub h: usize,
    /// Hex color
    pub color: String,
}

impl LayoutBlock {
    /// Create a block carrying the placeholder color
    pub fn new(id: impl Into<String>, x: usize, y: usize, w: usize, h: usize) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w,
            h,
            color: PLACEHOLDER_COLOR.to_string(),
        }
    }

    /// Column just past the right edge
    pub const fn right(&self) -> usize {
        self.x + self.w
    }

    /// Row just past the bottom edge
    pub const fn bottom(&self) -> usize {
        self.y + self.h
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.w * self.h
    }

    /// Whether the two blocks share at least one cell
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether the block lies entirely inside a `width` x `height` canvas
    pub const fn fits_within(&self, width: usize, height: usize) -> bool {
        self.w >= 1 && self.h >= 1 && self.right() <= width && self.bottom() <= height
    }

    /// Clamp position and size to a `width` x `height` canvas
    ///
    /// Keeps the origin inside the canvas and the size between one cell and
    /// the remaining room.
    pub fn clamp_to(&mut self, width: usize, height: usize) {
        self.x = self.x.min(width.saturating_sub(1));
        self.y = self.y.min(height.saturating_sub(1));
        self.w = self.w.clamp(1, width.saturating_sub(self.x).max(1));
        self.h = self.h.clamp(1, height.saturating_sub(self.y).max(1));
    }
}
