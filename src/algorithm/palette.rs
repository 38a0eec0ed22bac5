//! Palette resolution and seeded block coloring

use crate::io::configuration::DEFAULT_PALETTE;
use crate::io::error::{Result, invalid_catalog};
use crate::math::random::SeedRandom;
use crate::spatial::block::LayoutBlock;

/// Ordered, non-empty list of hex colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Create a palette from hex color strings
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or a color is not a valid hex color
    pub fn new(colors: Vec<String>) -> Result<Self> {
        if colors.is_empty() {
            return Err(invalid_catalog(&"palette must contain at least one color"));
        }
        for color in &colors {
            parse_hex_color(color)?;
        }
        Ok(Self { colors })
    }

    /// Palette used when a subcategory has none configured
    pub fn fallback() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(ToString::to_string).collect(),
        }
    }

    /// Colors in palette order
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes hold at least one color
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Draw one color from the stream
    ///
    /// Consumes exactly one value from `rng`.
    pub fn pick(&self, rng: &mut SeedRandom) -> &str {
        rng.next_index(self.colors.len())
            .and_then(|index| self.colors.get(index))
            .or_else(|| self.colors.first())
            .map_or(DEFAULT_PALETTE[0], String::as_str)
    }
}

/// Assign one palette color to every block, in order
///
/// Continues the stream that drove partitioning, so the colors are as
/// reproducible as the geometry.
pub fn colorize(blocks: &mut [LayoutBlock], palette: &Palette, rng: &mut SeedRandom) {
    for block in blocks {
        block.color = palette.pick(rng).to_string();
    }
}

/// Parse `#RRGGBB` or `#RGB` into opaque RGBA
///
/// # Errors
///
/// Returns an error if the string is not a hex color in one of those forms
pub fn parse_hex_color(color: &str) -> Result<[u8; 4]> {
    let invalid = || invalid_catalog(&format!("'{color}' is not a #RRGGBB or #RGB color"));

    let digits = color.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .ok_or_else(invalid)
    };

    match digits.len() {
        6 => Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255]),
        3 => {
            let [r, g, b] = [channel(0..1)?, channel(1..2)?, channel(2..3)?];
            Ok([r * 17, g * 17, b * 17, 255])
        }
        _ => Err(invalid()),
    }
}
