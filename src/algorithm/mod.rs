/// Slot-to-leaf pairing and integer conversion
pub mod assignment;
/// Generation pipeline and its request and result types
pub mod executor;
/// Palette handling and block coloring
pub mod palette;
/// Binary space partitioning of the canvas
pub mod partition;
/// Grid-based overlap correction
pub mod validation;
