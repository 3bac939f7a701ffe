#![allow(dead_code)]

use std::collections::HashMap;

use loam_runtime::{EnergySink, Entity, EntityKey, RuntimeParams, SceneSink};
use loam_world::{Layer, WorldGenParams};

/// Mirrors what a scene owner would hold and fails loudly on any
/// unbalanced callback.
#[derive(Default)]
pub struct RecordingSink {
    pub live: HashMap<EntityKey, Layer>,
    pub created: usize,
    pub removed: usize,
}

impl SceneSink for RecordingSink {
    fn entity_created(&mut self, key: EntityKey, _entity: Entity<'_>, layer: Layer) {
        let prev = self.live.insert(key, layer);
        assert!(prev.is_none(), "duplicate create {key:?}");
        self.created += 1;
    }

    fn entity_removed(&mut self, key: EntityKey, _entity: Entity<'_>, layer: Layer) {
        assert_eq!(self.live.remove(&key), Some(layer), "bad remove {key:?}");
        self.removed += 1;
    }
}

impl RecordingSink {
    pub fn count(&self, layer: Layer) -> usize {
        self.live.values().filter(|l| **l == layer).count()
    }
}

#[derive(Default)]
pub struct Energy(pub f32);

impl EnergySink for Energy {
    fn add_energy(&mut self, amount: f32) {
        self.0 += amount;
    }
}

/// Seed 42, 30px blocks, a 256px wide viewport: initial window [-200, 456).
pub fn small_world() -> WorldGenParams {
    WorldGenParams::for_viewport(256, 768)
}

pub fn dense_world() -> WorldGenParams {
    let mut p = small_world();
    p.tree_probability = 1.0;
    p
}

pub fn short_days() -> RuntimeParams {
    let mut p = RuntimeParams::default();
    p.cycle_ticks = 100;
    p
}
