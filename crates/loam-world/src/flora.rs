use std::sync::Arc;

use loam_blocks::{Block, Material};
use loam_geom::Vec2;
use rayon::prelude::*;

use crate::column::ColumnSpan;
use crate::column_rng::{ColumnRng, Purpose, cell_key};
use crate::height::HeightField;
use crate::tree::{Fruit, FruitId, Tree, TreePart};
use crate::worldgen::WorldGenParams;

/// Fruit edge length as a fraction of the block size.
pub const FRUIT_SIZE_RATIO: f32 = 0.8;

#[derive(Clone, Copy, Debug)]
struct TreeParams {
    probability: f32,
    trunk_min: i32,
    trunk_max: i32,
    leaf_grid: i32,
    leaf_probability: f32,
    fruit_probability: f32,
    canopy_offset_x: i32,
    canopy_offset_y: i32,
}

pub struct FloraGenerator {
    height: Arc<HeightField>,
    seed: i32,
    block_size: i32,
    trees: TreeParams,
}

impl FloraGenerator {
    pub fn new(params: &WorldGenParams, height: Arc<HeightField>) -> Self {
        Self {
            height,
            seed: params.seed,
            block_size: params.block_size,
            trees: TreeParams {
                probability: params.tree_probability,
                trunk_min: params.trunk_min,
                trunk_max: params.trunk_max,
                leaf_grid: params.leaf_grid,
                leaf_probability: params.leaf_probability,
                fruit_probability: params.fruit_probability,
                canopy_offset_x: params.canopy_offset_x,
                canopy_offset_y: params.canopy_offset_y,
            },
        }
    }

    /// Spawn draw for column `x`.
    #[inline]
    pub fn spawns_at(&self, x: i32) -> bool {
        ColumnRng::new(x, self.seed, Purpose::Spawn).chance(self.trees.probability)
    }

    pub fn tree_at(&self, x: i32) -> Option<Tree> {
        if self.spawns_at(x) {
            Some(self.build_tree(x))
        } else {
            None
        }
    }

    /// Trees whose anchor column lies in `[min_x, max_x)`, ordered by x.
    pub fn generate(&self, min_x: i32, max_x: i32) -> Vec<Tree> {
        let span = ColumnSpan::new(min_x, max_x, self.block_size);
        let out: Vec<Tree> = (0..span.len())
            .into_par_iter()
            .filter_map(|i| self.tree_at(span.nth(i)))
            .collect();
        log::trace!("flora [{}, {}): {} trees", min_x, max_x, out.len());
        out
    }

    fn build_tree(&self, x: i32) -> Tree {
        let s = self.block_size;
        let t = self.trees;
        let surface_y = self.height.surface_row(x, s);
        let mut rng = ColumnRng::new(x, self.seed, Purpose::Shape);
        let trunk_height = rng.range_inclusive(t.trunk_min, t.trunk_max);

        let grid = t.leaf_grid as usize;
        let mut parts = Vec::with_capacity(trunk_height as usize + grid * grid * 2);
        for i in 1..=trunk_height {
            let y = surface_y - i * s;
            parts.push(TreePart::Trunk(Block::new(
                x,
                y,
                s,
                Material::Trunk,
                cell_key(x, y, self.seed),
            )));
        }

        // Bottom-left canopy cell; rows grow upward from here.
        let trunk_top = surface_y - trunk_height * s;
        let origin_x = x - t.canopy_offset_x * s;
        let origin_y = trunk_top - t.canopy_offset_y * s;
        let fruit_size = s as f32 * FRUIT_SIZE_RATIO;
        for gx in 0..t.leaf_grid {
            for gy in 0..t.leaf_grid {
                if !rng.chance(t.leaf_probability) {
                    continue;
                }
                let lx = origin_x + gx * s;
                let ly = origin_y - gy * s;
                parts.push(TreePart::Leaf(Block::new(
                    lx,
                    ly,
                    s,
                    Material::Leaf,
                    cell_key(lx, ly, self.seed),
                )));
                if rng.chance(t.fruit_probability) {
                    debug_assert!(parts.len() <= usize::from(u16::MAX));
                    let id = FruitId {
                        anchor_x: x,
                        part: parts.len() as u16,
                    };
                    let pos = Vec2::new(
                        lx as f32 + (s as f32 - fruit_size),
                        ly as f32 - fruit_size,
                    );
                    parts.push(TreePart::Fruit(Fruit::new(id, pos, fruit_size)));
                }
            }
        }

        Tree {
            anchor_x: x,
            surface_y,
            trunk_height,
            parts,
        }
    }
}
