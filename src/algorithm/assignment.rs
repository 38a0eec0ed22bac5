//! Pairing of weighted slots with partition leaves and conversion to grid blocks

use crate::algorithm::partition::sort_by_area_descending;
use crate::catalog::weights::SlotWeights;
use crate::spatial::block::LayoutBlock;
use crate::spatial::rect::Rect;

/// One slot paired with the leaf it occupies
#[derive(Debug, Clone, PartialEq)]
pub struct SlotAssignment {
    /// Slot identifier
    pub slot: String,
    /// Weight the slot was ranked by
    pub weight: f64,
    /// Continuous leaf the block was derived from
    pub leaf: Rect,
    /// True when the leaf was already used by a higher-ranked slot
    pub reused: bool,
}

/// Result of pairing slots with leaves
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    /// Pairings, primary ones first, in rank order
    pub pairs: Vec<SlotAssignment>,
    /// Grid blocks matching `pairs` index for index, placeholder colored
    pub blocks: Vec<LayoutBlock>,
}

impl Assignment {
    /// Number of pairings that reuse a leaf
    pub fn reused_count(&self) -> usize {
        self.pairs.iter().filter(|pair| pair.reused).count()
    }
}

/// Pair slots with leaves by rank and convert each pair to a grid block
///
/// Slots are ranked by weight and leaves by area, both descending with stable
/// ties, then matched position by position. Slots left over when there are more
/// slots than leaves reuse the smallest leaves in rank order, wrapping around
/// when there are more leftovers than leaves. Those blocks overlap others and
/// are left to the validator.
pub fn assign_slots(
    slots: &[String],
    weights: &SlotWeights,
    leaves: &[Rect],
    width: usize,
    height: usize,
) -> Assignment {
    let mut ranked: Vec<(&str, f64)> = slots
        .iter()
        .map(|slot| (slot.as_str(), weights.weight_of(slot)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut regions = leaves.to_vec();
    sort_by_area_descending(&mut regions);

    let primary = ranked.len().min(regions.len());
    let extra = ranked.len() - primary;
    let reuse_pool = regions
        .get(regions.len().saturating_sub(extra)..)
        .unwrap_or_default();

    let mut assignment = Assignment::default();
    for (rank, &(slot, weight)) in ranked.iter().enumerate() {
        let (leaf, reused) = if rank < primary {
            (regions.get(rank), false)
        } else {
            let offset = rank - primary;
            (
                reuse_pool.get(offset.checked_rem(reuse_pool.len()).unwrap_or(0)),
                true,
            )
        };

        let Some(&leaf) = leaf else {
            continue;
        };

        let mut block = to_grid_block(slot, &leaf, width, height);
        block.clamp_to(width, height);

        assignment.pairs.push(SlotAssignment {
            slot: slot.to_string(),
            weight,
            leaf,
            reused,
        });
        assignment.blocks.push(block);
    }

    if extra > 0 {
        tracing::debug!(extra, leaves = regions.len(), "slots reuse existing leaves");
    }

    assignment
}

/// Convert a continuous leaf to integer cells
///
/// Both edges on each axis go through `floor`, so two leaves sharing a boundary
/// also share the integer boundary and the blocks neither gap nor overlap.
/// Every leaf is at least one unit wide, which keeps each block at least one
/// cell wide. The result is not yet clamped to the canvas.
pub fn to_grid_block(slot: &str, leaf: &Rect, width: usize, height: usize) -> LayoutBlock {
    let left = snap(leaf.left, width);
    let top = snap(leaf.top, height);
    let right = snap(leaf.right, width);
    let bottom = snap(leaf.bottom, height);

    LayoutBlock::new(
        slot,
        left,
        top,
        right.saturating_sub(left),
        bottom.saturating_sub(top),
    )
}

// Floor to a cell boundary within [0, limit]
fn snap(edge: f64, limit: usize) -> usize {
    (edge.floor().max(0.0) as usize).min(limit)
}
