use loam_world::ConfigError;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub window: Window,
    #[serde(default)]
    pub day: Day,
    #[serde(default)]
    pub fruit: FruitSection,
    #[serde(default)]
    pub clouds: Clouds,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Window {
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    #[serde(default = "default_margin")]
    pub margin: i32,
}
fn default_threshold() -> f32 {
    60.0
}
fn default_margin() -> i32 {
    200
}
impl Default for Window {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            margin: default_margin(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Day {
    #[serde(default = "default_cycle_seconds")]
    pub cycle_seconds: f32,
    #[serde(default = "default_tps")]
    pub ticks_per_second: u32,
}
fn default_cycle_seconds() -> f32 {
    30.0
}
fn default_tps() -> u32 {
    60
}
impl Default for Day {
    fn default() -> Self {
        Self {
            cycle_seconds: default_cycle_seconds(),
            ticks_per_second: default_tps(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct FruitSection {
    #[serde(default = "default_energy")]
    pub energy: f32,
}
fn default_energy() -> f32 {
    10.0
}
impl Default for FruitSection {
    fn default() -> Self {
        Self {
            energy: default_energy(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Clouds {
    #[serde(default = "default_clouds")]
    pub enable: bool,
}
fn default_clouds() -> bool {
    true
}
impl Default for Clouds {
    fn default() -> Self {
        Self {
            enable: default_clouds(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RuntimeParams {
    pub threshold: f32,
    pub margin: i32,
    pub cycle_seconds: f32,
    pub ticks_per_second: u32,
    /// Day length in ticks; also the fruit respawn delay.
    pub cycle_ticks: u64,
    pub fruit_energy: f32,
    pub clouds: bool,
}

impl RuntimeParams {
    pub fn from_config(cfg: &RuntimeConfig) -> Self {
        let tps = cfg.day.ticks_per_second;
        let cycle_ticks = (cfg.day.cycle_seconds * tps as f32).round().max(0.0) as u64;
        Self {
            threshold: cfg.window.threshold,
            margin: cfg.window.margin,
            cycle_seconds: cfg.day.cycle_seconds,
            ticks_per_second: tps,
            cycle_ticks,
            fruit_energy: cfg.fruit.energy,
            clouds: cfg.clouds.enable,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.threshold.is_finite() && self.threshold >= 0.0) {
            return Err(ConfigError::Invalid("window.threshold must be >= 0"));
        }
        if self.margin < 0 {
            return Err(ConfigError::Invalid("window.margin must be >= 0"));
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::Invalid("day.ticks_per_second must be positive"));
        }
        if self.cycle_seconds.is_nan() || self.cycle_seconds <= 0.0 || self.cycle_ticks == 0 {
            return Err(ConfigError::Invalid("day.cycle_seconds must be positive"));
        }
        if !self.fruit_energy.is_finite() {
            return Err(ConfigError::Invalid("fruit.energy must be finite"));
        }
        Ok(())
    }
}

impl Default for RuntimeParams {
    fn default() -> Self {
        Self::from_config(&RuntimeConfig::default())
    }
}

pub fn parse_runtime_params(src: &str) -> Result<RuntimeParams, ConfigError> {
    let cfg: RuntimeConfig = toml::from_str(src)?;
    let params = RuntimeParams::from_config(&cfg);
    params.validate()?;
    Ok(params)
}
