use loam_blocks::{Block, Material, approximate_color, approximate_mono};
use proptest::prelude::*;

fn close(a: u8, b: u8) -> bool {
    (i32::from(a) - i32::from(b)).abs() <= 10
}

proptest! {
    // Tints are a pure function of the key
    #[test]
    fn tint_is_deterministic(key in any::<u64>()) {
        for m in [Material::Ground, Material::Trunk, Material::Leaf, Material::Cloud] {
            prop_assert_eq!(m.tint(key), m.tint(key));
        }
    }

    // Every channel stays within the jitter band of the base color
    #[test]
    fn approximate_color_stays_near_base(key in any::<u64>(), r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let c = approximate_color([r, g, b], key);
        prop_assert!(close(c[0], r) && close(c[1], g) && close(c[2], b));
    }

    // Mono jitter moves unclamped channels together
    #[test]
    fn approximate_mono_moves_channels_together(key in any::<u64>()) {
        let c = approximate_mono([100, 120, 140], key);
        prop_assert_eq!(i32::from(c[1]) - i32::from(c[0]), 20);
        prop_assert_eq!(i32::from(c[2]) - i32::from(c[1]), 20);
    }
}

#[test]
fn block_bounds_cover_one_cell() {
    let b = Block::new(-60, 450, 30, Material::Ground, 1);
    let r = b.bounds();
    assert_eq!(r.min.x, -60.0);
    assert_eq!(r.max.y, 480.0);
    assert_eq!(r.width(), 30.0);
}
