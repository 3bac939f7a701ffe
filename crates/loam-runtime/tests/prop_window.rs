mod common;

use common::{RecordingSink, small_world};
use loam_runtime::{Runtime, RuntimeParams, WindowManager};
use loam_world::ColumnSpan;
use proptest::prelude::*;

fn moves() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-4_000.0f32..4_000.0, 1..40)
}

proptest! {
    // Width never changes and never collapses, whatever the movement
    #[test]
    fn width_is_conserved(path in moves(), threshold in 0.0f32..200.0) {
        let mut w = WindowManager::new(-200, 456, 128.0, threshold);
        for x in path {
            w.step(x);
            prop_assert_eq!(w.width(), 656);
            prop_assert!(w.min_x() < w.max_x());
        }
    }

    // Sub-threshold moves relative to the last slide never slide
    #[test]
    fn hysteresis_holds(offsets in prop::collection::vec(-60.0f32..=60.0, 1..100)) {
        let mut w = WindowManager::new(-200, 456, 128.0, 60.0);
        for d in offsets {
            prop_assert!(!w.step(128.0 + d).is_slide());
        }
        prop_assert_eq!(w.span(), (-200, 456));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // After every tick the live columns are exactly the window's columns
    #[test]
    fn live_columns_track_window(path in moves()) {
        let mut rt = Runtime::new(small_world(), RuntimeParams::default(), RecordingSink::default());
        for x in path {
            rt.tick(x);
            let (lo, hi) = rt.window().span();
            let expected: Vec<i32> = ColumnSpan::new(lo, hi, 30).iter().collect();
            let live: Vec<i32> = rt.live().column_anchors().collect();
            prop_assert_eq!(live, expected);
            prop_assert!(rt.live().trees().all(|t| t.tree.anchor_x >= lo && t.tree.anchor_x < hi));
        }
    }
}
