//! Spatial data structures
//!
//! This module contains:
//! - Continuous rectangles produced by partitioning
//! - Integer grid blocks and their coverage audit
//! - The cell ownership grid used for overlap correction

/// Integer grid blocks
pub mod block;
/// Cell coverage audit
pub mod coverage;
/// Cell ownership grid
pub mod grid;
/// Continuous rectangles
pub mod rect;

pub use block::LayoutBlock;
pub use rect::Rect;
