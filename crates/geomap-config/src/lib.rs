//! Configuration for geomap.
//!
//! Settings persist to disk as a RON file in the user's config directory and
//! can be overridden per run from the command line. Missing sections and
//! fields fall back to defaults, unknown ones are ignored.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE, Config, DebugConfig, ImportConfig, MAX_MAP_SIDE, MIN_MAP_SIDE, WorldConfig,
    default_config_dir,
};
pub use error::ConfigError;
