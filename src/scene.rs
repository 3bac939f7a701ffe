use hashbrown::HashMap;
use loam_geom::Rect;
use loam_runtime::{Entity, EntityKey, SceneSink};
use loam_world::{FruitId, Layer};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneEntry {
    pub layer: Layer,
    pub bounds: Rect,
}

/// Headless scene owner: tracks what would be drawn and collided with.
#[derive(Debug, Default)]
pub struct Scene {
    entries: HashMap<EntityKey, SceneEntry>,
    per_layer: HashMap<Layer, usize>,
    created: u64,
    removed: u64,
}

impl SceneSink for Scene {
    fn entity_created(&mut self, key: EntityKey, entity: Entity<'_>, layer: Layer) {
        let entry = SceneEntry {
            layer,
            bounds: entity.bounds(),
        };
        let prev = self.entries.insert(key, entry);
        assert!(prev.is_none(), "entity {key:?} created twice");
        *self.per_layer.entry(layer).or_default() += 1;
        self.created += 1;
    }

    fn entity_removed(&mut self, key: EntityKey, _entity: Entity<'_>, layer: Layer) {
        let prev = self.entries.remove(&key);
        assert!(
            prev.is_some_and(|e| e.layer == layer),
            "removal of unknown entity {key:?} on {}",
            layer.name()
        );
        if let Some(n) = self.per_layer.get_mut(&layer) {
            *n -= 1;
        }
        self.removed += 1;
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self, layer: Layer) -> usize {
        self.per_layer.get(&layer).copied().unwrap_or(0)
    }

    pub fn totals(&self) -> (u64, u64) {
        (self.created, self.removed)
    }

    /// Ripe fruit overlapping `rect`, in a stable order.
    pub fn fruits_touching(&self, rect: Rect) -> Vec<FruitId> {
        let mut out: Vec<FruitId> = self
            .entries
            .iter()
            .filter(|(_, e)| e.layer == Layer::Fruit && e.bounds.intersects(&rect))
            .filter_map(|(k, _)| match *k {
                EntityKey::TreePart { anchor_x, index } => Some(FruitId {
                    anchor_x,
                    part: index,
                }),
                _ => None,
            })
            .collect();
        out.sort_unstable();
        out
    }
}
