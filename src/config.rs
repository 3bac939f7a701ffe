use std::fs;
use std::path::Path;

use loam_runtime::{RuntimeConfig, RuntimeParams};
use loam_world::{ConfigError, WorldGenConfig, WorldGenParams};
use serde::Deserialize;

/// One TOML file carries both the generation and the runtime sections.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoamConfig {
    #[serde(flatten)]
    pub world: WorldGenConfig,
    #[serde(flatten)]
    pub runtime: RuntimeConfig,
}

pub fn parse(src: &str) -> Result<(WorldGenParams, RuntimeParams), ConfigError> {
    let cfg: LoamConfig = toml::from_str(src)?;
    let world = WorldGenParams::from_config(&cfg.world);
    let runtime = RuntimeParams::from_config(&cfg.runtime);
    world.validate()?;
    runtime.validate()?;
    Ok((world, runtime))
}

/// Reads `path`, or falls back to the built-in defaults when none is given.
pub fn load(path: Option<&Path>) -> Result<(WorldGenParams, RuntimeParams), ConfigError> {
    match path {
        Some(p) => parse(&fs::read_to_string(p)?),
        None => parse(""),
    }
}
