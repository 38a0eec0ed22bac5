//! Binary space partitioning of a rectangle into a target number of leaves
//!
//! The tree is never materialized: only the current leaves matter, so they live
//! in a flat list and a split replaces one entry with two. Each round sorts the
//! leaves by area and splits the largest one that is at least two units on both
//! axes. The sort is stable and children are appended first-then-second, which
//! makes the leaf order (and therefore tie-breaking) part of the output.

use crate::io::configuration::{
    EDGE_TOLERANCE, MIN_CHILD_SIDE, MIN_SPLITTABLE_SIDE, SPLIT_RATIO_MAX, SPLIT_RATIO_MIN,
    STACKED_PROBABILITY, TALL_ASPECT_RATIO, WIDE_ASPECT_RATIO,
};
use crate::math::random::SeedRandom;
use crate::spatial::rect::Rect;

/// How a leaf is divided into two children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitOrientation {
    /// Cut along a vertical line; children sit left and right
    SideBySide,
    /// Cut along a horizontal line; children sit top and bottom
    Stacked,
}

/// Partition `[0, width) x [0, height)` into up to `target` leaves
///
/// Returns fewer leaves when every leaf becomes too small to split.
pub fn partition(width: f64, height: f64, target: usize, rng: &mut SeedRandom) -> Vec<Rect> {
    partition_rect(Rect::new(0.0, 0.0, width, height), target, rng)
}

/// Partition an arbitrary rectangle into up to `target` leaves
pub fn partition_rect(root: Rect, target: usize, rng: &mut SeedRandom) -> Vec<Rect> {
    let mut leaves = vec![root];
    if target <= 1 {
        return leaves;
    }

    while leaves.len() < target {
        sort_by_area_descending(&mut leaves);

        let Some(index) = leaves.iter().position(is_divisible) else {
            tracing::debug!(
                produced = leaves.len(),
                target,
                "no leaf large enough to split"
            );
            break;
        };

        let leaf = leaves.remove(index);
        let (first, second) = split_leaf(&leaf, rng);
        leaves.push(first);
        leaves.push(second);
    }

    leaves
}

/// Stable sort, largest area first
pub fn sort_by_area_descending(rects: &mut [Rect]) {
    rects.sort_by(|a, b| b.area().total_cmp(&a.area()));
}

/// Whether a leaf can be split while leaving each child one unit wide
pub fn is_divisible(rect: &Rect) -> bool {
    rect.width() >= MIN_SPLITTABLE_SIDE && rect.height() >= MIN_SPLITTABLE_SIDE
}

/// Pick the split orientation for a leaf
///
/// Clearly wide or tall leaves are cut across their long side without touching
/// the stream; near-square leaves consume one draw.
pub fn choose_orientation(rect: &Rect, rng: &mut SeedRandom) -> SplitOrientation {
    let aspect = rect.aspect_ratio();
    if aspect > WIDE_ASPECT_RATIO {
        SplitOrientation::SideBySide
    } else if aspect < TALL_ASPECT_RATIO {
        SplitOrientation::Stacked
    } else if rng.next() < STACKED_PROBABILITY {
        SplitOrientation::Stacked
    } else {
        SplitOrientation::SideBySide
    }
}

/// Split a leaf into two children sharing one computed boundary
///
/// The cut lands between 30% and 70% of the split dimension and is clamped so
/// both children keep at least one unit.
pub fn split_leaf(rect: &Rect, rng: &mut SeedRandom) -> (Rect, Rect) {
    let orientation = choose_orientation(rect, rng);
    let ratio = rng.next_float(SPLIT_RATIO_MIN, SPLIT_RATIO_MAX);

    match orientation {
        SplitOrientation::Stacked => {
            let cut = clamp_cut(rect.top, rect.bottom, rect.top + rect.height() * ratio);
            (
                Rect::from_edges(rect.left, rect.top, rect.right, cut),
                Rect::from_edges(rect.left, cut, rect.right, rect.bottom),
            )
        }
        SplitOrientation::SideBySide => {
            let cut = clamp_cut(rect.left, rect.right, rect.left + rect.width() * ratio);
            (
                Rect::from_edges(rect.left, rect.top, cut, rect.bottom),
                Rect::from_edges(cut, rect.top, rect.right, rect.bottom),
            )
        }
    }
}

fn clamp_cut(start: f64, end: f64, cut: f64) -> f64 {
    cut.min(end - MIN_CHILD_SIDE).max(start + MIN_CHILD_SIDE)
}

/// Whether `leaves` tile `root` exactly
///
/// Every leaf must lie inside the root, no two leaves may overlap, and the
/// leaf areas must sum to the root area within tolerance.
pub fn covers_exactly(root: &Rect, leaves: &[Rect]) -> bool {
    let inside = leaves.iter().all(|leaf| root.contains(leaf));
    let disjoint = leaves.iter().enumerate().all(|(i, a)| {
        leaves
            .iter()
            .skip(i + 1)
            .all(|b| !a.overlaps(b))
    });
    let total: f64 = leaves.iter().map(Rect::area).sum();

    inside && disjoint && (total - root.area()).abs() <= EDGE_TOLERANCE * root.area().max(1.0)
}
