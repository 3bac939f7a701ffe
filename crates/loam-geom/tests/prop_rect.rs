use loam_geom::{Rect, Vec2};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f32> {
    -1.0e5f32..1.0e5
}

fn extent() -> impl Strategy<Value = f32> {
    1.0f32..500.0
}

fn arb_vec2() -> impl Strategy<Value = Vec2> {
    (coord(), coord()).prop_map(|(x, y)| Vec2::new(x, y))
}

fn arb_rect() -> impl Strategy<Value = Rect> {
    (arb_vec2(), extent(), extent())
        .prop_map(|(o, w, h)| Rect::from_origin_size(o, Vec2::new(w, h)))
}

proptest! {
    // Intersection is symmetric
    #[test]
    fn intersects_is_symmetric(a in arb_rect(), b in arb_rect()) {
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    // A non-empty rect always intersects itself and contains its own center
    #[test]
    fn rect_contains_its_center(a in arb_rect()) {
        prop_assert!(a.intersects(&a));
        prop_assert!(a.contains(a.center()));
    }

    // Translating both rects by the same offset keeps the relation
    #[test]
    fn intersection_is_translation_invariant(a in arb_rect(), t in -1000.0f32..1000.0) {
        let b = a.translated(Vec2::new(a.width() * 0.5, 0.0));
        let shift = Vec2::new(t.round(), t.round());
        prop_assert_eq!(a.intersects(&b), a.translated(shift).intersects(&b.translated(shift)));
    }

    // Addition commutes
    #[test]
    fn vec2_add_commutes(a in arb_vec2(), b in arb_vec2()) {
        prop_assert_eq!(a + b, b + a);
    }
}
