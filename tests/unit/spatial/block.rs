//! Tests for integer grid blocks

#[cfg(test)]
mod tests {
    use slotgrid::io::configuration::PLACEHOLDER_COLOR;
    use slotgrid::spatial::block::LayoutBlock;

    // Tests new blocks carry the placeholder color and derived extents
    // Verified by computing right as x + h
    #[test]
    fn test_new_block_extents() {
        let block = LayoutBlock::new("hero", 2, 3, 4, 5);

        assert_eq!(block.id, "hero");
        assert_eq!(block.color, PLACEHOLDER_COLOR);
        assert_eq!(block.right(), 6);
        assert_eq!(block.bottom(), 8);
        assert_eq!(block.area(), 20);
    }

    // Tests overlap detection is exclusive of shared edges
    // Verified by using <= in overlaps
    #[test]
    fn test_overlaps() {
        let a = LayoutBlock::new("a", 0, 0, 4, 4);
        let touching = LayoutBlock::new("b", 4, 0, 2, 4);
        let crossing = LayoutBlock::new("c", 3, 3, 2, 2);

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&crossing));
        assert!(crossing.overlaps(&a));
        assert!(a.overlaps(&a));
    }

    // Tests canvas fit rejects empty and overhanging blocks
    // Verified by dropping the zero-size check
    #[test]
    fn test_fits_within() {
        assert!(LayoutBlock::new("a", 8, 16, 4, 4).fits_within(12, 20));
        assert!(!LayoutBlock::new("a", 9, 16, 4, 4).fits_within(12, 20));
        assert!(!LayoutBlock::new("a", 0, 0, 0, 4).fits_within(12, 20));
    }

    // Tests clamping pulls blocks inside and keeps them at least one cell
    // Verified by clamping size before origin
    #[test]
    fn test_clamp_to() {
        let mut overhang = LayoutBlock::new("a", 10, 18, 5, 5);
        overhang.clamp_to(12, 20);
        assert_eq!((overhang.x, overhang.y, overhang.w, overhang.h), (10, 18, 2, 2));

        let mut outside = LayoutBlock::new("b", 30, 40, 3, 3);
        outside.clamp_to(12, 20);
        assert_eq!((outside.x, outside.y, outside.w, outside.h), (11, 19, 1, 1));
        assert!(outside.fits_within(12, 20));

        let mut empty = LayoutBlock::new("c", 0, 0, 0, 0);
        empty.clamp_to(12, 20);
        assert_eq!((empty.w, empty.h), (1, 1));
    }

    // Tests the JSON shape uses the short field names
    // Verified by renaming w to width
    #[test]
    fn test_serialized_shape() {
        let mut block = LayoutBlock::new("hero", 0, 0, 4, 12);
        block.color = "#FF6B6B".to_string();

        let json = serde_json::to_value(&block).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "hero", "x": 0, "y": 0, "w": 4, "h": 12, "color": "#FF6B6B"
            })
        );
    }
}
