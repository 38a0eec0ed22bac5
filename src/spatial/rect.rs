//! Continuous rectangles used while partitioning the canvas
//!
//! A rectangle is stored by its four edges rather than origin plus size. When a
//! split produces two children, the shared edge is one `f64` value held by both,
//! so later rounding sees exactly the same boundary from either side.

use crate::io::configuration::EDGE_TOLERANCE;

/// Axis-aligned rectangle in continuous canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge (inclusive)
    pub left: f64,
    /// Top edge (inclusive)
    pub top: f64,
    /// Right edge (exclusive)
    pub right: f64,
    /// Bottom edge (exclusive)
    pub bottom: f64,
}

impl Rect {
    /// Build a rectangle from origin and size
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            left: x,
            top: y,
            right: x + w,
            bottom: y + h,
        }
    }

    /// Build a rectangle directly from its edges
    pub const fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Surface area
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Width over height
    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }

    /// Whether `other` lies inside this rectangle, within the edge tolerance
    pub fn contains(&self, other: &Self) -> bool {
        other.left >= self.left - EDGE_TOLERANCE
            && other.top >= self.top - EDGE_TOLERANCE
            && other.right <= self.right + EDGE_TOLERANCE
            && other.bottom <= self.bottom + EDGE_TOLERANCE
    }

    /// Whether the interiors intersect by more than the edge tolerance
    ///
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left + EDGE_TOLERANCE < other.right
            && other.left + EDGE_TOLERANCE < self.right
            && self.top + EDGE_TOLERANCE < other.bottom
            && other.top + EDGE_TOLERANCE < self.bottom
    }
}
