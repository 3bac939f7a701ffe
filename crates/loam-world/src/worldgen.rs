use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct WorldGenConfig {
    #[serde(default)]
    pub world: WorldSection,
    #[serde(default)]
    pub height: Height,
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub trees: Trees,
}

#[derive(Clone, Debug, Deserialize)]
pub struct WorldSection {
    #[serde(default = "default_seed")]
    pub seed: i32,
    #[serde(default = "default_block_size")]
    pub block_size: i32,
    #[serde(default = "default_viewport_width")]
    pub viewport_width: i32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: i32,
}
fn default_seed() -> i32 {
    42
}
fn default_block_size() -> i32 {
    30
}
fn default_viewport_width() -> i32 {
    1024
}
fn default_viewport_height() -> i32 {
    768
}
impl Default for WorldSection {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            block_size: default_block_size(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Height {
    #[serde(default = "default_baseline_ratio")]
    pub baseline_ratio: f32,
    #[serde(default = "default_amplitude_blocks")]
    pub amplitude_blocks: f32,
    #[serde(default = "default_height_freq")]
    pub frequency: f32,
    #[serde(default = "default_octaves")]
    pub octaves: i32,
}
fn default_baseline_ratio() -> f32 {
    2.0 / 3.0
}
fn default_amplitude_blocks() -> f32 {
    5.0
}
fn default_height_freq() -> f32 {
    0.0025
}
fn default_octaves() -> i32 {
    3
}
impl Default for Height {
    fn default() -> Self {
        Self {
            baseline_ratio: default_baseline_ratio(),
            amplitude_blocks: default_amplitude_blocks(),
            frequency: default_height_freq(),
            octaves: default_octaves(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Terrain {
    #[serde(default = "default_depth")]
    pub depth: i32,
}
fn default_depth() -> i32 {
    20
}
impl Default for Terrain {
    fn default() -> Self {
        Self {
            depth: default_depth(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Trees {
    #[serde(default = "default_tree_prob")]
    pub probability: f32,
    #[serde(default = "default_trunk_min")]
    pub trunk_min: i32,
    #[serde(default = "default_trunk_max")]
    pub trunk_max: i32,
    #[serde(default = "default_leaf_grid")]
    pub leaf_grid: i32,
    #[serde(default = "default_leaf_prob")]
    pub leaf_probability: f32,
    #[serde(default = "default_fruit_prob")]
    pub fruit_probability: f32,
    #[serde(default = "default_canopy_offset_x")]
    pub canopy_offset_x: i32,
    #[serde(default = "default_canopy_offset_y")]
    pub canopy_offset_y: i32,
}
fn default_tree_prob() -> f32 {
    0.05
}
fn default_trunk_min() -> i32 {
    3
}
fn default_trunk_max() -> i32 {
    7
}
fn default_leaf_grid() -> i32 {
    7
}
fn default_leaf_prob() -> f32 {
    0.8
}
fn default_fruit_prob() -> f32 {
    0.8
}
fn default_canopy_offset_x() -> i32 {
    3
}
fn default_canopy_offset_y() -> i32 {
    1
}
impl Default for Trees {
    fn default() -> Self {
        Self {
            probability: default_tree_prob(),
            trunk_min: default_trunk_min(),
            trunk_max: default_trunk_max(),
            leaf_grid: default_leaf_grid(),
            leaf_probability: default_leaf_prob(),
            fruit_probability: default_fruit_prob(),
            canopy_offset_x: default_canopy_offset_x(),
            canopy_offset_y: default_canopy_offset_y(),
        }
    }
}

/// Part indices are `u16`, so a tree holds at most this many parts.
pub const MAX_TREE_PARTS: u64 = u16::MAX as u64 + 1;

// Flattened params used in tight loops (snapshot of config)
#[derive(Clone, Debug)]
pub struct WorldGenParams {
    pub seed: i32,
    pub block_size: i32,
    pub viewport_width: i32,
    pub viewport_height: i32,
    pub baseline: f32,
    pub amplitude: f32,
    pub height_frequency: f32,
    pub height_octaves: i32,
    pub terrain_depth: i32,
    pub tree_probability: f32,
    pub trunk_min: i32,
    pub trunk_max: i32,
    pub leaf_grid: i32,
    pub leaf_probability: f32,
    pub fruit_probability: f32,
    pub canopy_offset_x: i32,
    pub canopy_offset_y: i32,
}

impl WorldGenParams {
    pub fn from_config(cfg: &WorldGenConfig) -> Self {
        let block = cfg.world.block_size;
        Self {
            seed: cfg.world.seed,
            block_size: block,
            viewport_width: cfg.world.viewport_width,
            viewport_height: cfg.world.viewport_height,
            baseline: cfg.world.viewport_height as f32 * cfg.height.baseline_ratio,
            amplitude: cfg.height.amplitude_blocks * block as f32,
            height_frequency: cfg.height.frequency,
            height_octaves: cfg.height.octaves,
            terrain_depth: cfg.terrain.depth,
            tree_probability: cfg.trees.probability,
            trunk_min: cfg.trees.trunk_min,
            trunk_max: cfg.trees.trunk_max,
            leaf_grid: cfg.trees.leaf_grid,
            leaf_probability: cfg.trees.leaf_probability,
            fruit_probability: cfg.trees.fruit_probability,
            canopy_offset_x: cfg.trees.canopy_offset_x,
            canopy_offset_y: cfg.trees.canopy_offset_y,
        }
    }

    pub fn with_seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self
    }

    /// Default parameters for a viewport of the given size.
    pub fn for_viewport(width: i32, height: i32) -> Self {
        let mut cfg = WorldGenConfig::default();
        cfg.world.viewport_width = width;
        cfg.world.viewport_height = height;
        Self::from_config(&cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size <= 0 {
            return Err(ConfigError::Invalid("world.block_size must be positive"));
        }
        if self.viewport_width <= 0 || self.viewport_height <= 0 {
            return Err(ConfigError::Invalid("world viewport must be non-empty"));
        }
        if self.terrain_depth <= 0 {
            return Err(ConfigError::Invalid("terrain.depth must be positive"));
        }
        if !self.amplitude.is_finite() || !self.baseline.is_finite() {
            return Err(ConfigError::Invalid("height parameters must be finite"));
        }
        for p in [
            self.tree_probability,
            self.leaf_probability,
            self.fruit_probability,
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid("probabilities must lie in [0, 1]"));
            }
        }
        if self.trunk_min < 1 || self.trunk_min > self.trunk_max {
            return Err(ConfigError::Invalid(
                "trees.trunk_min must be >= 1 and <= trees.trunk_max",
            ));
        }
        if self.leaf_grid <= 0 {
            return Err(ConfigError::Invalid("trees.leaf_grid must be positive"));
        }
        if self.max_tree_parts() > MAX_TREE_PARTS {
            return Err(ConfigError::Invalid(
                "trees.trunk_max + 2 * trees.leaf_grid^2 must fit a u16 part index",
            ));
        }
        Ok(())
    }

    /// Upper bound on parts in one tree: every trunk block, plus a leaf and
    /// a fruit on every canopy cell.
    pub fn max_tree_parts(&self) -> u64 {
        let grid = u64::from(self.leaf_grid.unsigned_abs());
        u64::from(self.trunk_max.unsigned_abs()) + 2 * grid * grid
    }
}

impl Default for WorldGenParams {
    fn default() -> Self {
        Self::from_config(&WorldGenConfig::default())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read(std::io::Error),
    Parse(toml::de::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(e) => write!(f, "read error: {}", e),
            ConfigError::Parse(e) => write!(f, "parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Read(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

pub fn parse_params(src: &str) -> Result<WorldGenParams, ConfigError> {
    let cfg: WorldGenConfig = toml::from_str(src)?;
    let params = WorldGenParams::from_config(&cfg);
    params.validate()?;
    Ok(params)
}

pub fn load_params_from_path(path: &Path) -> Result<WorldGenParams, ConfigError> {
    let s = fs::read_to_string(path)?;
    parse_params(&s)
}
