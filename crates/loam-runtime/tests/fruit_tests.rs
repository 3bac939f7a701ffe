mod common;

use common::{Energy, RecordingSink, dense_world, short_days};
use loam_geom::{Rect, Vec2};
use loam_runtime::{EntityKey, Runtime};
use loam_world::{FruitId, Layer};

fn first_fruit(rt: &Runtime<RecordingSink>) -> FruitId {
    rt.live()
        .trees()
        .filter(|t| t.tree.anchor_x >= 0)
        .flat_map(|t| t.tree.fruits())
        .map(|f| f.id)
        .next()
        .expect("dense world grows fruit")
}

fn sink_layer(rt: &Runtime<RecordingSink>, id: FruitId) -> Option<Layer> {
    rt.sink()
        .live
        .get(&EntityKey::TreePart {
            anchor_x: id.anchor_x,
            index: id.part,
        })
        .copied()
}

#[test]
fn consumed_fruit_hides_for_one_cycle() {
    let mut rt = Runtime::new(dense_world(), short_days(), RecordingSink::default());
    let id = first_fruit(&rt);
    let mut energy = Energy::default();
    let focal = rt.initial_focal();

    rt.tick(focal);
    let eaten_at = rt.day().now();
    assert!(rt.consume_fruit(id, &mut energy));
    assert_eq!(energy.0, 10.0);
    assert_eq!(sink_layer(&rt, id), Some(Layer::Background));

    // Consume is idempotent while the fruit is gone.
    assert!(!rt.consume_fruit(id, &mut energy));
    assert_eq!(energy.0, 10.0);

    while rt.day().now() + 1 < eaten_at + 100 {
        let report = rt.tick(focal);
        assert_eq!(report.fruits_respawned, 0);
        assert!(!rt.live().fruit(id).is_some_and(|f| f.is_ripe()));
    }
    let report = rt.tick(focal);
    assert_eq!(report.tick, eaten_at + 100);
    assert_eq!(report.fruits_respawned, 1);
    assert!(rt.live().fruit(id).is_some_and(|f| f.is_ripe()));
    assert_eq!(sink_layer(&rt, id), Some(Layer::Fruit));

    // Energy grant is re-armed.
    assert!(rt.consume_fruit(id, &mut energy));
    assert_eq!(energy.0, 20.0);
}

#[test]
fn unknown_fruit_is_ignored() {
    let mut rt = Runtime::new(dense_world(), short_days(), RecordingSink::default());
    let mut energy = Energy::default();
    let bogus = FruitId {
        anchor_x: 1_000_000,
        part: 3,
    };
    assert!(!rt.consume_fruit(bogus, &mut energy));
    assert_eq!(energy.0, 0.0);
    assert_eq!(rt.pending_events(), 0);
}

#[test]
fn respawn_for_evicted_fruit_is_a_no_op() {
    let mut rt = Runtime::new(dense_world(), short_days(), RecordingSink::default());
    let id = first_fruit(&rt);
    let mut energy = Energy::default();
    let focal = rt.initial_focal();

    rt.tick(focal);
    assert!(rt.consume_fruit(id, &mut energy));
    let first_due = rt.day().now() + 100;

    // Slide away, then back: the tree is regenerated with fresh fruit.
    rt.tick(focal + 5_000.0);
    assert!(rt.live().fruit(id).is_none());
    rt.tick(focal);
    assert!(rt.live().fruit(id).is_some_and(|f| f.is_ripe()));

    // Eat the regenerated fruit; the old event must not bring it back early.
    assert!(rt.consume_fruit(id, &mut energy));
    let second_due = rt.day().now() + 100;
    while rt.day().now() < first_due {
        assert_eq!(rt.tick(focal).fruits_respawned, 0);
    }
    assert!(!rt.live().fruit(id).is_some_and(|f| f.is_ripe()));
    while rt.day().now() < second_due {
        rt.tick(focal);
    }
    assert!(rt.live().fruit(id).is_some_and(|f| f.is_ripe()));
    assert_eq!(rt.pending_events(), 0);
}

#[test]
fn ripe_fruit_query_respects_bounds() {
    let mut rt = Runtime::new(dense_world(), short_days(), RecordingSink::default());
    let id = first_fruit(&rt);
    let bounds = rt.live().fruit(id).map(|f| f.bounds()).expect("fruit is live");
    let probe = Rect::from_origin_size(bounds.center(), Vec2::splat(1.0));
    assert!(rt.live().ripe_fruits_in(probe).any(|f| f.id == id));

    rt.consume_fruit(id, &mut Energy::default());
    assert!(!rt.live().ripe_fruits_in(probe).any(|f| f.id == id));

    let empty_sky = Rect::from_origin_size(Vec2::new(0.0, -10_000.0), Vec2::splat(30.0));
    assert_eq!(rt.live().ripe_fruits_in(empty_sky).count(), 0);
}
