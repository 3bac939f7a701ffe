use std::sync::Arc;

use loam_blocks::{Block, Material};
use rayon::prelude::*;

use crate::column::ColumnSpan;
use crate::column_rng::cell_key;
use crate::height::HeightField;
use crate::worldgen::WorldGenParams;

/// The ground blocks of one column, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainColumn {
    pub x: i32,
    pub surface_y: i32,
    pub blocks: Vec<Block>,
}

pub struct TerrainGenerator {
    height: Arc<HeightField>,
    seed: i32,
    block_size: i32,
    depth: i32,
}

impl TerrainGenerator {
    pub fn new(params: &WorldGenParams, height: Arc<HeightField>) -> Self {
        Self {
            height,
            seed: params.seed,
            block_size: params.block_size,
            depth: params.terrain_depth,
        }
    }

    #[inline]
    pub fn block_size(&self) -> i32 {
        self.block_size
    }

    /// Stacks `depth` ground blocks downward from the column's surface row.
    pub fn column(&self, x: i32) -> TerrainColumn {
        let s = self.block_size;
        let surface_y = self.height.surface_row(x, s);
        let blocks = (0..self.depth)
            .map(|row| {
                let y = surface_y + row * s;
                Block::new(x, y, s, Material::Ground, cell_key(x, y, self.seed))
            })
            .collect();
        TerrainColumn {
            x,
            surface_y,
            blocks,
        }
    }

    /// Columns for `[min_x, max_x)`, ordered by x. Columns are independent,
    /// so they are built in parallel.
    pub fn generate_columns(&self, min_x: i32, max_x: i32) -> Vec<TerrainColumn> {
        let span = ColumnSpan::new(min_x, max_x, self.block_size);
        let out: Vec<TerrainColumn> = (0..span.len())
            .into_par_iter()
            .map(|i| self.column(span.nth(i)))
            .collect();
        log::trace!(
            "terrain [{}, {}): {} columns",
            min_x,
            max_x,
            out.len()
        );
        out
    }

    pub fn generate(&self, min_x: i32, max_x: i32) -> Vec<Block> {
        self.generate_columns(min_x, max_x)
            .into_iter()
            .flat_map(|c| c.blocks)
            .collect()
    }
}
