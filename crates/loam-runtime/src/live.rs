use std::collections::BTreeMap;
use std::mem;

use loam_blocks::Block;
use loam_geom::Rect;
use loam_world::{Fruit, FruitId, TerrainColumn, Tree};

/// A materialised tree plus the epoch stamped when it was inserted. A tree
/// regenerated after eviction gets a new epoch, which is how stale respawn
/// events are told apart from live ones.
#[derive(Clone, Debug)]
pub struct LiveTree {
    pub tree: Tree,
    pub epoch: u64,
}

#[derive(Debug, Default)]
pub struct Evicted {
    pub columns: Vec<TerrainColumn>,
    pub trees: Vec<LiveTree>,
}

/// Everything currently materialised, keyed by anchor column.
#[derive(Debug, Default)]
pub struct LiveWorld {
    columns: BTreeMap<i32, TerrainColumn>,
    trees: BTreeMap<i32, LiveTree>,
    clouds: Vec<Block>,
    next_epoch: u64,
}

impl LiveWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_column(&mut self, column: TerrainColumn) -> &TerrainColumn {
        let x = column.x;
        let prev = self.columns.insert(x, column);
        assert!(prev.is_none(), "column {x} materialised twice");
        &self.columns[&x]
    }

    pub fn insert_tree(&mut self, tree: Tree) -> &LiveTree {
        let x = tree.anchor_x;
        self.next_epoch += 1;
        let live = LiveTree {
            tree,
            epoch: self.next_epoch,
        };
        let prev = self.trees.insert(x, live);
        assert!(prev.is_none(), "tree at {x} materialised twice");
        &self.trees[&x]
    }

    pub fn set_clouds(&mut self, clouds: Vec<Block>) {
        self.clouds = clouds;
    }

    pub fn clouds(&self) -> &[Block] {
        &self.clouds
    }

    /// Removes every column and tree anchored strictly left of `x`.
    pub fn evict_below(&mut self, x: i32) -> Evicted {
        let columns = self.columns.split_off(&x);
        let trees = self.trees.split_off(&x);
        Evicted {
            columns: mem::replace(&mut self.columns, columns).into_values().collect(),
            trees: mem::replace(&mut self.trees, trees).into_values().collect(),
        }
    }

    /// Removes every column and tree anchored at `x` or to its right.
    pub fn evict_from(&mut self, x: i32) -> Evicted {
        Evicted {
            columns: self.columns.split_off(&x).into_values().collect(),
            trees: self.trees.split_off(&x).into_values().collect(),
        }
    }

    pub fn columns(&self) -> impl Iterator<Item = &TerrainColumn> + '_ {
        self.columns.values()
    }

    pub fn column_anchors(&self) -> impl Iterator<Item = i32> + '_ {
        self.columns.keys().copied()
    }

    pub fn column(&self, x: i32) -> Option<&TerrainColumn> {
        self.columns.get(&x)
    }

    pub fn trees(&self) -> impl Iterator<Item = &LiveTree> + '_ {
        self.trees.values()
    }

    pub fn tree(&self, anchor_x: i32) -> Option<&LiveTree> {
        self.trees.get(&anchor_x)
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    pub fn block_count(&self) -> usize {
        self.columns.values().map(|c| c.blocks.len()).sum()
    }

    pub fn fruit(&self, id: FruitId) -> Option<&Fruit> {
        self.trees.get(&id.anchor_x)?.tree.fruit(id.part)
    }

    /// The fruit and the epoch of the tree that carries it.
    pub fn fruit_mut(&mut self, id: FruitId) -> Option<(&mut Fruit, u64)> {
        let live = self.trees.get_mut(&id.anchor_x)?;
        let epoch = live.epoch;
        live.tree.fruit_mut(id.part).map(|f| (f, epoch))
    }

    /// Ripe fruit whose bounds overlap `rect`.
    pub fn ripe_fruits_in(&self, rect: Rect) -> impl Iterator<Item = &Fruit> + '_ {
        self.trees
            .values()
            .flat_map(|t| t.tree.fruits())
            .filter(move |f| f.is_ripe() && f.bounds().intersects(&rect))
    }
}
