//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use geomap_world::{Climate, Rotation};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration.
pub const CONFIG_FILE: &str = "config.ron";

/// Smallest accepted map side; anything smaller has no inner tiles.
pub const MIN_MAP_SIDE: u32 = 3;

/// Largest accepted map side.
pub const MAX_MAP_SIDE: u32 = 1 << 16;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Map creation settings.
    pub world: WorldConfig,
    /// Raster lookup settings.
    pub import: ImportConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Settings of the map rasters are applied to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Map size along X in tiles.
    pub map_size_x: u32,
    /// Map size along Y in tiles.
    pub map_size_y: u32,
    pub climate: Climate,
    /// How images are laid onto the map.
    pub rotation: Rotation,
    /// Seed for dithering and random tree species.
    pub seed: u64,
}

/// Where relative raster locators are looked up.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ImportConfig {
    /// Roots searched in order; each is joined with the layer subdirectory.
    pub search_paths: Vec<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            map_size_x: 256,
            map_size_y: 256,
            climate: Climate::Temperate,
            rotation: Rotation::CounterClockwise,
            seed: 0,
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

/// Platform config directory for geomap, if the platform has one.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("geomap"))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Checks values serde cannot constrain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sides = MIN_MAP_SIDE..=MAX_MAP_SIDE;
        let (x, y) = (self.world.map_size_x, self.world.map_size_y);
        if !sides.contains(&x) || !sides.contains(&y) {
            log::warn!("Rejecting map size {x}x{y}");
            return Err(ConfigError::InvalidMapSize {
                size_x: x,
                size_y: y,
                min: MIN_MAP_SIDE,
                max: MAX_MAP_SIDE,
            });
        }
        Ok(())
    }
}
