//! Per-tick world streaming: the sliding window, the live entity store,
//! fruit respawn scheduling, and the day clock.
#![forbid(unsafe_code)]

pub mod config;
pub mod day_cycle;
pub mod live;
pub mod schedule;
pub mod sink;
pub mod window;

pub use config::{RuntimeConfig, RuntimeParams, parse_runtime_params};
pub use day_cycle::{DayCycle, DaySample};
pub use live::{Evicted, LiveTree, LiveWorld};
pub use schedule::{EventQueue, Scheduled};
pub use sink::{EnergySink, Entity, EntityKey, SceneSink};
pub use window::{Span, Transition, WindowManager};

use loam_blocks::Block;
use loam_world::{FruitId, Generators, Layer, TerrainColumn, WorldGenParams, cloud_blocks};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuntimeEvent {
    RespawnFruit { id: FruitId, epoch: u64 },
}

/// What one tick changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub day: DaySample,
    pub transition: Transition,
    pub columns_created: usize,
    pub columns_evicted: usize,
    pub trees_created: usize,
    pub trees_evicted: usize,
    pub fruits_respawned: usize,
}

#[derive(Clone, Copy, Debug, Default)]
struct Counts {
    columns: usize,
    trees: usize,
}

pub struct Runtime<S: SceneSink> {
    world: WorldGenParams,
    params: RuntimeParams,
    gens: Generators,
    window: WindowManager,
    live: LiveWorld,
    events: EventQueue<RuntimeEvent>,
    day: DayCycle,
    sink: S,
}

impl<S: SceneSink> Runtime<S> {
    /// Builds the generators and materialises the initial window
    /// `[-margin, viewport_width + margin)` plus the clouds.
    ///
    /// Both parameter sets are expected to have passed `validate()`.
    pub fn new(world: WorldGenParams, params: RuntimeParams, sink: S) -> Self {
        let gens = Generators::new(&world);
        let min_x = -params.margin;
        let max_x = world.viewport_width + params.margin;
        let focal = world.viewport_width as f32 / 2.0;
        let mut rt = Self {
            window: WindowManager::new(min_x, max_x, focal, params.threshold),
            day: DayCycle::new(params.cycle_ticks),
            live: LiveWorld::new(),
            events: EventQueue::new(),
            gens,
            world,
            params,
            sink,
        };
        if rt.params.clouds {
            let clouds = cloud_blocks(&rt.world);
            for (i, b) in clouds.iter().enumerate() {
                let key = EntityKey::Cloud { index: i as u16 };
                rt.sink
                    .entity_created(key, Entity::Block(b), Layer::for_material(b.material));
            }
            rt.live.set_clouds(clouds);
        }
        let made = rt.materialise(min_x, max_x);
        log::info!(
            "world seed {} window [{}, {}): {} columns, {} trees",
            rt.world.seed,
            min_x,
            max_x,
            made.columns,
            made.trees
        );
        rt
    }

    /// Terrain surface height at `x`.
    #[inline]
    pub fn height_at(&self, x: f32) -> f32 {
        self.gens.height.height_at(x)
    }

    /// Where the focal point starts: the middle of the viewport.
    #[inline]
    pub fn initial_focal(&self) -> f32 {
        self.world.viewport_width as f32 / 2.0
    }

    /// Advances the clock, fires due respawns, then runs the window
    /// transition for the focal point's new position.
    pub fn tick(&mut self, focal_x: f32) -> TickReport {
        let day = self.day.advance();
        let now = self.day.now();

        let mut fruits_respawned = 0;
        while let Some(ev) = self.events.pop_due(now) {
            match ev.kind {
                RuntimeEvent::RespawnFruit { id, epoch } => {
                    if self.respawn_fruit(id, epoch) {
                        fruits_respawned += 1;
                    }
                }
            }
        }

        let transition = self.window.step(focal_x);
        let (made, gone) = match transition {
            Transition::Hold => (Counts::default(), Counts::default()),
            Transition::SlideRight {
                generate: (lo, hi),
                evict_below,
            } => {
                let gone = self.live.evict_below(evict_below);
                let gone = self.release(gone);
                (self.materialise(lo, hi), gone)
            }
            Transition::SlideLeft {
                generate: (lo, hi),
                evict_from,
            } => {
                let gone = self.live.evict_from(evict_from);
                let gone = self.release(gone);
                (self.materialise(lo, hi), gone)
            }
        };
        if transition.is_slide() {
            log::debug!(
                target: "window",
                "tick {}: window [{}, {}) +{} cols +{} trees, -{} cols -{} trees",
                now,
                self.window.min_x(),
                self.window.max_x(),
                made.columns,
                made.trees,
                gone.columns,
                gone.trees
            );
        }

        TickReport {
            tick: now,
            day,
            transition,
            columns_created: made.columns,
            columns_evicted: gone.columns,
            trees_created: made.trees,
            trees_evicted: gone.trees,
            fruits_respawned,
        }
    }

    /// Eats a ripe fruit: it moves to the background layer, `energy` is
    /// credited, and a respawn is scheduled one day later. Returns false for
    /// unknown or already-consumed fruit.
    pub fn consume_fruit(&mut self, id: FruitId, energy: &mut dyn EnergySink) -> bool {
        let now = self.day.now();
        let Some((fruit, epoch)) = self.live.fruit_mut(id) else {
            log::trace!(target: "fruit", "consume of unknown fruit {:?}", id);
            return false;
        };
        let delay = self.params.cycle_ticks;
        if fruit.consume(now, delay).is_none() {
            log::trace!(target: "fruit", "fruit {:?} already consumed", id);
            return false;
        }
        self.sink.layer_changed(
            fruit_key(id),
            Entity::Fruit(&*fruit),
            Layer::Fruit,
            Layer::Background,
        );
        energy.add_energy(self.params.fruit_energy);
        self.events
            .emit_after(now, delay, RuntimeEvent::RespawnFruit { id, epoch });
        true
    }

    fn respawn_fruit(&mut self, id: FruitId, epoch: u64) -> bool {
        match self.live.fruit_mut(id) {
            Some((fruit, live_epoch)) if live_epoch == epoch => {
                if !fruit.respawn() {
                    return false;
                }
                self.sink.layer_changed(
                    fruit_key(id),
                    Entity::Fruit(&*fruit),
                    Layer::Background,
                    Layer::Fruit,
                );
                true
            }
            _ => {
                log::trace!(target: "fruit", "stale respawn for {:?} (epoch {})", id, epoch);
                false
            }
        }
    }

    fn materialise(&mut self, min_x: i32, max_x: i32) -> Counts {
        let columns = self.gens.terrain.generate_columns(min_x, max_x);
        let trees = self.gens.flora.generate(min_x, max_x);
        let counts = Counts {
            columns: columns.len(),
            trees: trees.len(),
        };
        for column in columns {
            let column = self.live.insert_column(column);
            announce_column(&mut self.sink, column, true);
        }
        for tree in trees {
            let live = self.live.insert_tree(tree);
            announce_tree(&mut self.sink, live, true);
        }
        counts
    }

    fn release(&mut self, gone: Evicted) -> Counts {
        for column in &gone.columns {
            announce_column(&mut self.sink, column, false);
        }
        for tree in &gone.trees {
            announce_tree(&mut self.sink, tree, false);
        }
        Counts {
            columns: gone.columns.len(),
            trees: gone.trees.len(),
        }
    }

    pub fn window(&self) -> &WindowManager {
        &self.window
    }

    pub fn live(&self) -> &LiveWorld {
        &self.live
    }

    pub fn day(&self) -> &DayCycle {
        &self.day
    }

    pub fn world_params(&self) -> &WorldGenParams {
        &self.world
    }

    pub fn params(&self) -> &RuntimeParams {
        &self.params
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn clouds(&self) -> &[Block] {
        self.live.clouds()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

}

#[inline]
fn fruit_key(id: FruitId) -> EntityKey {
    EntityKey::TreePart {
        anchor_x: id.anchor_x,
        index: id.part,
    }
}

fn announce_column<S: SceneSink>(sink: &mut S, column: &TerrainColumn, created: bool) {
    for b in &column.blocks {
        let key = EntityKey::Ground { x: b.x, y: b.y };
        let layer = Layer::for_material(b.material);
        if created {
            sink.entity_created(key, Entity::Block(b), layer);
        } else {
            sink.entity_removed(key, Entity::Block(b), layer);
        }
    }
}

fn announce_tree<S: SceneSink>(sink: &mut S, live: &LiveTree, created: bool) {
    let anchor_x = live.tree.anchor_x;
    for (i, part) in live.tree.parts.iter().enumerate() {
        let key = EntityKey::TreePart {
            anchor_x,
            index: i as u16,
        };
        if created {
            sink.entity_created(key, Entity::from_part(part), part.layer());
        } else {
            sink.entity_removed(key, Entity::from_part(part), part.layer());
        }
    }
}
