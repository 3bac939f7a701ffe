use loam_blocks::Block;
use loam_geom::{Rect, Vec2};

use crate::layer::Layer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartRole {
    Trunk,
    Leaf,
    Fruit,
}

impl PartRole {
    pub const ALL: [PartRole; 3] = [PartRole::Trunk, PartRole::Leaf, PartRole::Fruit];

    pub const fn name(self) -> &'static str {
        match self {
            PartRole::Trunk => "trunk",
            PartRole::Leaf => "leaf",
            PartRole::Fruit => "fruit",
        }
    }
}

/// Stable identity of a fruit: its tree's anchor column and its index in
/// the tree's part list. Regenerating the tree yields the same ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FruitId {
    pub anchor_x: i32,
    pub part: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FruitState {
    Ripe,
    Consumed { respawn_at: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fruit {
    pub id: FruitId,
    pub pos: Vec2,
    pub size: f32,
    state: FruitState,
}

impl Fruit {
    pub fn new(id: FruitId, pos: Vec2, size: f32) -> Self {
        Self {
            id,
            pos,
            size,
            state: FruitState::Ripe,
        }
    }

    #[inline]
    pub fn state(&self) -> FruitState {
        self.state
    }

    #[inline]
    pub fn is_ripe(&self) -> bool {
        matches!(self.state, FruitState::Ripe)
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.pos, Vec2::splat(self.size))
    }

    /// Ripe fruit sits on the fruit layer; consumed fruit is parked in the
    /// background until it respawns.
    #[inline]
    pub fn layer(&self) -> Layer {
        if self.is_ripe() {
            Layer::Fruit
        } else {
            Layer::Background
        }
    }

    /// Ripe -> consumed. Returns the respawn tick, or `None` when the fruit
    /// was already consumed.
    pub fn consume(&mut self, now: u64, delay: u64) -> Option<u64> {
        match self.state {
            FruitState::Ripe => {
                let respawn_at = now.saturating_add(delay);
                self.state = FruitState::Consumed { respawn_at };
                Some(respawn_at)
            }
            FruitState::Consumed { .. } => None,
        }
    }

    /// Consumed -> ripe. Returns false when the fruit was already ripe.
    pub fn respawn(&mut self) -> bool {
        match self.state {
            FruitState::Consumed { .. } => {
                self.state = FruitState::Ripe;
                true
            }
            FruitState::Ripe => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TreePart {
    Trunk(Block),
    Leaf(Block),
    Fruit(Fruit),
}

impl TreePart {
    #[inline]
    pub fn role(&self) -> PartRole {
        match self {
            TreePart::Trunk(_) => PartRole::Trunk,
            TreePart::Leaf(_) => PartRole::Leaf,
            TreePart::Fruit(_) => PartRole::Fruit,
        }
    }

    #[inline]
    pub fn layer(&self) -> Layer {
        match self {
            TreePart::Trunk(b) | TreePart::Leaf(b) => Layer::for_material(b.material),
            TreePart::Fruit(f) => f.layer(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        match self {
            TreePart::Trunk(b) | TreePart::Leaf(b) => b.bounds(),
            TreePart::Fruit(f) => f.bounds(),
        }
    }
}

/// One tree, created and evicted as a unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub anchor_x: i32,
    /// Top row of the ground block the trunk stands on.
    pub surface_y: i32,
    pub trunk_height: i32,
    pub parts: Vec<TreePart>,
}

impl Tree {
    pub fn trunk(&self) -> impl Iterator<Item = &Block> + '_ {
        self.parts.iter().filter_map(|p| match p {
            TreePart::Trunk(b) => Some(b),
            _ => None,
        })
    }

    pub fn leaves(&self) -> impl Iterator<Item = &Block> + '_ {
        self.parts.iter().filter_map(|p| match p {
            TreePart::Leaf(b) => Some(b),
            _ => None,
        })
    }

    pub fn fruits(&self) -> impl Iterator<Item = &Fruit> + '_ {
        self.parts.iter().filter_map(|p| match p {
            TreePart::Fruit(f) => Some(f),
            _ => None,
        })
    }

    pub fn fruit(&self, part: u16) -> Option<&Fruit> {
        match self.parts.get(usize::from(part)) {
            Some(TreePart::Fruit(f)) => Some(f),
            _ => None,
        }
    }

    pub fn fruit_mut(&mut self, part: u16) -> Option<&mut Fruit> {
        match self.parts.get_mut(usize::from(part)) {
            Some(TreePart::Fruit(f)) => Some(f),
            _ => None,
        }
    }

    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}
