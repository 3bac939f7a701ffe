use loam_blocks::Block;
use loam_geom::Rect;
use loam_world::{Fruit, Layer, TreePart};

/// Stable handle for one live entity, valid from its creation callback until
/// its removal callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKey {
    Ground { x: i32, y: i32 },
    Cloud { index: u16 },
    TreePart { anchor_x: i32, index: u16 },
}

#[derive(Clone, Copy, Debug)]
pub enum Entity<'a> {
    Block(&'a Block),
    Fruit(&'a Fruit),
}

impl<'a> Entity<'a> {
    pub fn from_part(part: &'a TreePart) -> Self {
        match part {
            TreePart::Trunk(b) | TreePart::Leaf(b) => Entity::Block(b),
            TreePart::Fruit(f) => Entity::Fruit(f),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Entity::Block(b) => b.bounds(),
            Entity::Fruit(f) => f.bounds(),
        }
    }
}

/// Owner of rendering and physics for everything the runtime materialises.
pub trait SceneSink {
    fn entity_created(&mut self, key: EntityKey, entity: Entity<'_>, layer: Layer);

    fn entity_removed(&mut self, key: EntityKey, entity: Entity<'_>, layer: Layer);

    /// An entity moved between layers (fruit consumed or respawned).
    fn layer_changed(&mut self, key: EntityKey, entity: Entity<'_>, from: Layer, to: Layer) {
        self.entity_removed(key, entity, from);
        self.entity_created(key, entity, to);
    }
}

/// Receiver of the energy granted by eating fruit.
pub trait EnergySink {
    fn add_energy(&mut self, amount: f32);
}
