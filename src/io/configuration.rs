//! Algorithm constants and runtime configuration defaults

// Canvas defaults
/// Default canvas width in grid cells
pub const DEFAULT_WIDTH: usize = 12;
/// Default canvas height in grid cells
pub const DEFAULT_HEIGHT: usize = 20;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Partitioning
/// Lower bound of the split position as a fraction of the split dimension
pub const SPLIT_RATIO_MIN: f64 = 0.3;
/// Upper bound of the split position as a fraction of the split dimension
pub const SPLIT_RATIO_MAX: f64 = 0.7;
/// Aspect ratio above which a leaf is split into side-by-side children
pub const WIDE_ASPECT_RATIO: f64 = 1.2;
/// Aspect ratio below which a leaf is split into stacked children
pub const TALL_ASPECT_RATIO: f64 = 0.8;
/// Draws below this value stack the children of a near-square leaf
pub const STACKED_PROBABILITY: f64 = 0.5;
/// A leaf needs at least this extent on both axes to be split
pub const MIN_SPLITTABLE_SIDE: f64 = 2.0;
/// Each child keeps at least this extent along the split axis
pub const MIN_CHILD_SIDE: f64 = 1.0;
/// Tolerance for comparing shared edges and summed areas
pub const EDGE_TOLERANCE: f64 = 1e-4;

// Slots and colors
/// Weight of a slot missing from the weight table
pub const DEFAULT_SLOT_WEIGHT: f64 = 1.0;
/// Color carried by a block until the colorizer runs
pub const PLACEHOLDER_COLOR: &str = "#000000";
/// Palette used when a subcategory has none configured
pub const DEFAULT_PALETTE: [&str; 3] = ["#cccccc", "#888888", "#444444"];

// Preview output
/// Default edge length of one grid cell in the PNG preview, in pixels
pub const DEFAULT_CELL_SIZE: u32 = 24;
/// Largest accepted preview cell size in pixels
pub const MAX_CELL_SIZE: u32 = 256;
/// Largest accepted preview size in pixels, 256 MiB of RGBA
pub const MAX_PREVIEW_PIXELS: u64 = 64 * 1024 * 1024;
/// Factor applied to a block color to draw its outline
pub const OUTLINE_SHADE: f32 = 0.6;
