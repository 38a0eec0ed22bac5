//! Content catalog consumed by layout generation

/// Catalog bundled with the crate
pub mod builtin;
/// Catalog types, lookups and validation
pub mod model;
/// Slot weight table
pub mod weights;

pub use model::{Catalog, Category, Selection, Subcategory};
pub use weights::SlotWeights;
