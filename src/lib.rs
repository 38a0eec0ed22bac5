//! Deterministic page layouts for named content slots
//!
//! A text seed drives a binary space partitioning of a fixed integer grid into
//! one rectangle per slot. Heavier slots receive larger rectangles, a grid pass
//! removes rounding overlaps, and every block takes a color from the
//! subcategory palette. The same seed, catalog selection and canvas size always
//! produce the same layout.

#![forbid(unsafe_code)]

/// Partitioning, slot assignment, overlap correction and coloring
pub mod algorithm;
/// Categories, subcategories, palettes and slot weights
pub mod catalog;
/// Input/output operations, configuration and error handling
pub mod io;
/// Seeded pseudo-random numbers
pub mod math;
/// Rectangles, grid blocks and cell-level bookkeeping
pub mod spatial;

pub use algorithm::executor::{
    Diagnostic, GenerationRequest, Layout, LayoutGenerator, generate_layout,
};
pub use catalog::Catalog;
pub use io::error::{LayoutError, Result};
pub use spatial::block::LayoutBlock;
