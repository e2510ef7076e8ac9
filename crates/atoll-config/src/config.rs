//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use atoll_terrain::{GridConfig, Level};
use atoll_texture::ColorMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain generation settings.
    pub terrain: TerrainConfig,
    /// Artifact output settings.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Terrain generation settings, mirroring [`GridConfig`] plus the execution
/// strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Side length of the square grid in cells.
    pub size: u32,
    /// Coordinate multiplier applied before noise sampling.
    pub noise_scale: f64,
    /// World seed.
    pub seed: u64,
    /// Steepness of the border falloff curve.
    pub falloff_sharpness: f64,
    /// Classification thresholds, ascending by `max_elevation`.
    pub levels: Vec<Level>,
    /// Generate rows on a worker pool instead of the calling thread.
    pub parallel: bool,
}

/// Artifact output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the generated artifacts.
    pub dir: PathBuf,
    /// Integer upscale factor for the PNG map (nearest-neighbor).
    pub texture_upscale: u32,
    /// Also write the meshes as Wavefront OBJ files.
    pub write_obj: bool,
    /// Land type palette for the texture.
    pub colors: ColorMap,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level filter (e.g. "debug", "info", "warn").
    pub log_level: String,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        let grid = GridConfig::default();
        Self {
            size: grid.size,
            noise_scale: grid.noise_scale,
            seed: grid.seed,
            falloff_sharpness: grid.falloff_sharpness,
            levels: grid.levels,
            parallel: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
            texture_upscale: 4,
            write_obj: true,
            colors: ColorMap::default(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl TerrainConfig {
    /// Converts into a validated [`GridConfig`].
    pub fn to_grid_config(&self) -> Result<GridConfig, ConfigError> {
        let config = GridConfig {
            size: self.size,
            noise_scale: self.noise_scale,
            seed: self.seed,
            falloff_sharpness: self.falloff_sharpness,
            levels: self.levels.clone(),
        };
        config.validate()?;
        Ok(config)
    }
}

// --- Load / Save ---

impl Config {
    /// Loads config from `path`, or creates a default config file there.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::Parse)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(path)?;
            log::info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Saves the config to `path` as pretty-printed RON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;
        std::fs::write(path, serialized).map_err(ConfigError::Write)?;
        Ok(())
    }
}
