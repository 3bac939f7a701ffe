//! Deterministic side-scroller world generation: height field, per-column
//! randomness, terrain columns, trees, and clouds.
#![forbid(unsafe_code)]

pub mod cloud;
pub mod column;
pub mod column_rng;
pub mod flora;
pub mod height;
pub mod layer;
pub mod terrain;
pub mod tree;
pub mod worldgen;

use std::sync::Arc;

pub use cloud::cloud_blocks;
pub use column::ColumnSpan;
pub use column_rng::{ColumnRng, Purpose, cell_key, column_seed};
pub use flora::FloraGenerator;
pub use height::HeightField;
pub use layer::Layer;
pub use terrain::{TerrainColumn, TerrainGenerator};
pub use tree::{Fruit, FruitId, FruitState, PartRole, Tree, TreePart};
pub use worldgen::{
    ConfigError, MAX_TREE_PARTS, WorldGenConfig, WorldGenParams, load_params_from_path,
    parse_params,
};

/// Height field plus both generators, sharing one noise instance.
pub struct Generators {
    pub height: Arc<HeightField>,
    pub terrain: TerrainGenerator,
    pub flora: FloraGenerator,
}

impl Generators {
    pub fn new(params: &WorldGenParams) -> Self {
        let height = Arc::new(HeightField::new(params));
        Self {
            terrain: TerrainGenerator::new(params, Arc::clone(&height)),
            flora: FloraGenerator::new(params, Arc::clone(&height)),
            height,
        }
    }
}
