//! Tests for binary space partitioning of the canvas

#[cfg(test)]
mod tests {
    use slotgrid::algorithm::partition::{
        SplitOrientation, choose_orientation, covers_exactly, is_divisible, partition,
        partition_rect, sort_by_area_descending, split_leaf,
    };
    use slotgrid::math::random::SeedRandom;
    use slotgrid::spatial::rect::Rect;

    fn assert_rect(actual: &Rect, expected: (f64, f64, f64, f64)) {
        let (left, top, right, bottom) = expected;
        assert!(
            (actual.left - left).abs() < 1e-9
                && (actual.top - top).abs() < 1e-9
                && (actual.right - right).abs() < 1e-9
                && (actual.bottom - bottom).abs() < 1e-9,
            "expected {expected:?}, got {actual:?}"
        );
    }

    // Tests a square root draws orientation and ratio from the stream
    // Verified by reversing the stacked probability comparison
    #[test]
    fn test_partition_square_into_two() {
        let mut rng = SeedRandom::new("abc");
        let leaves = partition(10.0, 10.0, 2, &mut rng);

        assert_eq!(leaves.len(), 2);
        assert_rect(&leaves[0], (0.0, 0.0, 6.786_145_404_663_922, 10.0));
        assert_rect(&leaves[1], (6.786_145_404_663_922, 0.0, 10.0, 10.0));
        assert_eq!(rng.state(), 220_808);
    }

    // Tests the largest leaf is split each round and children are appended
    // Verified by splitting the last leaf instead of the largest
    #[test]
    fn test_partition_splits_largest_leaf() {
        let mut rng = SeedRandom::new("abc");
        let leaves = partition(12.0, 20.0, 3, &mut rng);

        assert_eq!(leaves.len(), 3);
        assert_rect(&leaves[0], (0.0, 13.180_075_445_816_186, 12.0, 20.0));
        assert_rect(&leaves[1], (0.0, 0.0, 8.140_432_098_765_43, 13.180_075_445_816_186));
        assert_rect(&leaves[2], (8.140_432_098_765_43, 0.0, 12.0, 13.180_075_445_816_186));
    }

    // Tests a single requested leaf returns the root without drawing
    // Verified by entering the split loop for target one
    #[test]
    fn test_partition_single_target() {
        let mut rng = SeedRandom::new("abc");
        let leaves = partition(12.0, 20.0, 1, &mut rng);

        assert_eq!(leaves, vec![Rect::new(0.0, 0.0, 12.0, 20.0)]);
        assert_eq!(rng.state(), 96_354);
    }

    // Tests small canvases stop early when no leaf can be split
    // Verified by lowering the minimum splittable side to one
    #[test]
    fn test_partition_stops_on_small_canvases() {
        let cases = [
            ((1.0, 1.0), 1),
            ((2.0, 2.0), 2),
            ((2.0, 3.0), 2),
            ((3.0, 3.0), 2),
            ((5.0, 5.0), 4),
            ((1.0, 40.0), 1),
            ((40.0, 1.0), 1),
        ];

        for ((width, height), expected) in cases {
            let mut rng = SeedRandom::new("small");
            let leaves = partition(width, height, 7, &mut rng);
            assert_eq!(leaves.len(), expected, "canvas {width}x{height}");
            assert!(leaves.iter().all(|leaf| leaf.width() >= 1.0 && leaf.height() >= 1.0));
        }
    }

    // Tests leaves always tile the root exactly
    // Verified by dropping the second child of each split
    #[test]
    fn test_partition_covers_root() {
        for seed in ["a", "b", "c", "layout", "2025-12-03"] {
            for target in 1..12 {
                let mut rng = SeedRandom::new(seed);
                let root = Rect::new(0.0, 0.0, 24.0, 30.0);
                let leaves = partition(24.0, 30.0, target, &mut rng);

                assert_eq!(leaves.len(), target);
                assert!(covers_exactly(&root, &leaves), "seed {seed}, target {target}");
            }
        }
    }

    // Tests coverage check rejects gaps and overlaps
    // Verified by skipping the pairwise overlap check
    #[test]
    fn test_covers_exactly_rejects_bad_tilings() {
        let root = Rect::new(0.0, 0.0, 10.0, 10.0);
        let left = Rect::from_edges(0.0, 0.0, 5.0, 10.0);
        let right = Rect::from_edges(5.0, 0.0, 10.0, 10.0);
        let wide = Rect::from_edges(4.0, 0.0, 10.0, 10.0);

        assert!(covers_exactly(&root, &[left, right]));
        assert!(!covers_exactly(&root, &[left]));
        assert!(!covers_exactly(&root, &[left, wide]));
    }

    // Tests clearly wide and tall leaves do not consume a draw
    // Verified by always drawing before checking the aspect ratio
    #[test]
    fn test_choose_orientation() {
        let mut rng = SeedRandom::new("abc");

        let wide = Rect::new(0.0, 0.0, 13.0, 10.0);
        assert_eq!(choose_orientation(&wide, &mut rng), SplitOrientation::SideBySide);
        let tall = Rect::new(0.0, 0.0, 7.0, 10.0);
        assert_eq!(choose_orientation(&tall, &mut rng), SplitOrientation::Stacked);
        assert_eq!(rng.state(), 96_354);

        // First draw for "abc" is 0.897..., not below one half
        let square = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(choose_orientation(&square, &mut rng), SplitOrientation::SideBySide);
        assert_eq!(rng.state(), 209_371);
    }

    // Tests cuts are clamped so each child keeps one unit
    // Verified by removing the clamp
    #[test]
    fn test_split_leaf_clamps_cut() {
        let mut rng = SeedRandom::new("clamp");
        let leaf = Rect::new(3.0, 4.0, 2.0, 2.0);
        let (first, second) = split_leaf(&leaf, &mut rng);

        let unit_wide = (first.width() - 1.0).abs() < f64::EPSILON;
        let unit_tall = (first.height() - 1.0).abs() < f64::EPSILON;
        assert!(unit_wide || unit_tall);
        assert!((first.area() - 2.0).abs() < 1e-12);
        assert!((second.area() - 2.0).abs() < 1e-12);
        assert!(covers_exactly(&leaf, &[first, second]));
    }

    // Tests children share the exact cut value
    // Verified by recomputing the second child's edge from its width
    #[test]
    fn test_split_leaf_shares_boundary() {
        let mut rng = SeedRandom::new("shared");
        let leaf = Rect::new(0.3, 0.0, 17.1, 6.0);
        let (first, second) = split_leaf(&leaf, &mut rng);

        assert_eq!(first.right.to_bits(), second.left.to_bits());
        assert!(first.width() >= 0.3 * 17.1 - 1e-9 && first.width() <= 0.7 * 17.1 + 1e-9);
    }

    // Tests area sort is descending and stable for ties
    // Verified by using an unstable sort
    #[test]
    fn test_sort_by_area_descending() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(5.0, 0.0, 1.0, 4.0);
        let c = Rect::new(0.0, 5.0, 3.0, 3.0);
        let mut rects = [a, b, c];
        sort_by_area_descending(&mut rects);

        assert_eq!(rects, [c, a, b]);
    }

    // Tests divisibility requires two units on both axes
    // Verified by checking only the width
    #[test]
    fn test_is_divisible() {
        assert!(is_divisible(&Rect::new(0.0, 0.0, 2.0, 2.0)));
        assert!(!is_divisible(&Rect::new(0.0, 0.0, 1.99, 50.0)));
        assert!(!is_divisible(&Rect::new(0.0, 0.0, 50.0, 1.5)));
    }

    // Tests an offset root is tiled without leaking past its origin
    // Verified by splitting from zero instead of the root's left edge
    #[test]
    fn test_partition_rect_offset_root() {
        let root = Rect::new(3.0, 5.0, 10.0, 7.0);

        for target in 1..=8 {
            let mut rng = SeedRandom::new("offset");
            let leaves = partition_rect(root, target, &mut rng);

            assert!(leaves.len() <= target);
            if target <= 4 {
                assert_eq!(leaves.len(), target);
            }
            assert!(covers_exactly(&root, &leaves), "target {target}");
            assert!(leaves.iter().all(|leaf| leaf.left >= 3.0 && leaf.top >= 5.0));
        }
    }
}
