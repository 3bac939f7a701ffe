use loam_geom::{Rect, Vec2};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec2_approx_eq(a: Vec2, b: Vec2, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps)
}

#[test]
fn vec2_add_sub() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(-4.0, 5.0);
    let c = a + b;
    assert!(vec2_approx_eq(c, Vec2::new(-3.0, 7.0), 1e-6));
    assert!(vec2_approx_eq(c - a, b, 1e-6));
}

#[test]
fn vec2_assign_ops() {
    let mut v = Vec2::ONE;
    v += Vec2::new(2.0, 3.0);
    assert!(vec2_approx_eq(v, Vec2::new(3.0, 4.0), 1e-6));
    v -= Vec2::new(1.0, 2.0);
    assert!(vec2_approx_eq(v, Vec2::splat(2.0), 1e-6));
}

#[test]
fn rect_contains_is_half_open() {
    let r = Rect::from_origin_size(Vec2::new(30.0, 60.0), Vec2::splat(30.0));
    assert!(r.contains(Vec2::new(30.0, 60.0)));
    assert!(r.contains(Vec2::new(59.9, 89.9)));
    assert!(!r.contains(Vec2::new(60.0, 70.0)));
    assert!(!r.contains(Vec2::new(40.0, 90.0)));
}

#[test]
fn rect_touching_edges_do_not_intersect() {
    let a = Rect::from_origin_size(Vec2::ZERO, Vec2::splat(30.0));
    let b = Rect::from_origin_size(Vec2::new(30.0, 0.0), Vec2::splat(30.0));
    let c = Rect::from_origin_size(Vec2::new(29.0, 29.0), Vec2::splat(30.0));
    assert!(!a.intersects(&b));
    assert!(a.intersects(&c));
    assert!(c.intersects(&a));
}
