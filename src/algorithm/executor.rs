//! Layout generation pipeline
//!
//! Resolves the catalog selection, partitions the canvas, pairs slots with
//! leaves, corrects the integer grid and colors the result. One `SeedRandom`
//! drives partitioning and coloring in that order, so the whole layout is a
//! pure function of the request and the catalog.

use crate::algorithm::assignment::assign_slots;
use crate::algorithm::palette::colorize;
use crate::algorithm::partition::partition;
use crate::algorithm::validation::validate_and_fix;
use crate::catalog::Catalog;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::math::random::SeedRandom;
use crate::spatial::block::LayoutBlock;
use crate::spatial::coverage::CoverageReport;
use serde::{Deserialize, Serialize};

/// Parameters of a single generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Non-empty seed text
    pub seed: String,
    /// Category id or display name
    pub category: String,
    /// Subcategory id or display name
    pub subcategory: String,
    /// Canvas width in cells
    pub width: usize,
    /// Canvas height in cells
    pub height: usize,
}

impl GenerationRequest {
    /// Create a request on the default 12 x 20 canvas
    pub fn new(
        seed: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            seed: seed.into(),
            category: category.into(),
            subcategory: subcategory.into(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }

    /// Replace the canvas dimensions
    #[must_use]
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Check seed and dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is empty or a dimension is zero or above
    /// [`MAX_GRID_DIMENSION`]
    pub fn validate(&self) -> Result<()> {
        if self.seed.is_empty() {
            return Err(invalid_parameter("seed", &"", &"seed must not be empty"));
        }
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}

/// Non-fatal condition met while generating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The canvas could not be split into one leaf per slot
    ///
    /// Slots beyond the leaf count share leaves with other slots.
    CapacityShortfall {
        /// Leaves needed, one per slot
        requested: usize,
        /// Leaves the partitioner produced
        produced: usize,
    },

    /// No free position existed for a block, so it overlaps another
    UnplacedBlock {
        /// Slot of the block
        slot: String,
        /// Left column kept for the block
        x: usize,
        /// Top row kept for the block
        y: usize,
        /// Block width
        w: usize,
        /// Block height
        h: usize,
    },
}

/// Generated layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Canvas width in cells
    pub width: usize,
    /// Canvas height in cells
    pub height: usize,
    /// Blocks in output order
    pub blocks: Vec<LayoutBlock>,
    /// Conditions worth surfacing to the caller
    pub diagnostics: Vec<Diagnostic>,
}

impl Layout {
    /// Cell coverage of the canvas
    pub fn coverage(&self) -> CoverageReport {
        CoverageReport::measure(&self.blocks, self.width, self.height)
    }

    /// Whether generation had to fall back to shared leaves
    pub fn is_degraded(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Serialize the layout to JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Layout generator bound to a catalog
#[derive(Debug, Clone, Copy)]
pub struct LayoutGenerator<'a> {
    catalog: &'a Catalog,
}

impl<'a> LayoutGenerator<'a> {
    /// Create a generator reading from `catalog`
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Generate the layout for a request
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request has an empty seed or an out-of-range dimension
    /// - The category or subcategory cannot be resolved
    /// - The category has no slots
    pub fn generate(&self, request: &GenerationRequest) -> Result<Layout> {
        request.validate()?;
        tracing::debug!(
            seed = %request.seed,
            category = %request.category,
            subcategory = %request.subcategory,
            width = request.width,
            height = request.height,
            "generating layout"
        );
        let selection = self
            .catalog
            .resolve(&request.category, &request.subcategory)?;

        let (width, height) = (request.width, request.height);
        let mut rng = SeedRandom::new(&request.seed);
        let mut diagnostics = Vec::new();

        let requested = selection.slots.len().max(1);
        let leaves = partition(width as f64, height as f64, requested, &mut rng);
        tracing::debug!(leaves = leaves.len(), requested, "partitioned canvas");

        if leaves.len() < requested {
            tracing::warn!(
                requested,
                produced = leaves.len(),
                width,
                height,
                "canvas too small for one leaf per slot; slots will share leaves"
            );
            diagnostics.push(Diagnostic::CapacityShortfall {
                requested,
                produced: leaves.len(),
            });
        }

        let assignment = assign_slots(
            selection.slots,
            &self.catalog.slot_weights,
            &leaves,
            width,
            height,
        );

        let validated = validate_and_fix(&assignment.blocks, width, height);
        diagnostics.extend(validated.unresolved.iter().filter_map(|&index| {
            validated
                .blocks
                .get(index)
                .map(|block| Diagnostic::UnplacedBlock {
                    slot: block.id.clone(),
                    x: block.x,
                    y: block.y,
                    w: block.w,
                    h: block.h,
                })
        }));

        let mut blocks = validated.blocks;
        colorize(&mut blocks, &selection.palette, &mut rng);

        Ok(Layout {
            width,
            height,
            blocks,
            diagnostics,
        })
    }
}

/// Generate a layout with a one-off generator
///
/// # Errors
///
/// Returns an error under the same conditions as [`LayoutGenerator::generate`]
pub fn generate_layout(catalog: &Catalog, request: &GenerationRequest) -> Result<Layout> {
    LayoutGenerator::new(catalog).generate(request)
}
