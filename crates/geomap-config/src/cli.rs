//! Command-line overrides shared by geomap binaries.

use std::path::PathBuf;

use clap::Args;
use geomap_world::{Climate, Rotation};

use crate::Config;

/// Common geomap command-line arguments.
///
/// CLI values override settings loaded from `config.ron`. Binaries flatten
/// this into their own parser.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    /// Map size along X in tiles.
    #[arg(long = "map-x")]
    pub map_x: Option<u32>,

    /// Map size along Y in tiles.
    #[arg(long = "map-y")]
    pub map_y: Option<u32>,

    /// Landscape climate (temperate, arctic, tropic, toyland).
    #[arg(long)]
    pub climate: Option<Climate>,

    /// Image orientation on the map (ccw, cw).
    #[arg(long)]
    pub rotation: Option<Rotation>,

    /// Seed for dithering and random tree species.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(x) = args.map_x {
            self.world.map_size_x = x;
        }
        if let Some(y) = args.map_y {
            self.world.map_size_y = y;
        }
        if let Some(climate) = args.climate {
            self.world.climate = climate;
        }
        if let Some(rotation) = args.rotation {
            self.world.rotation = rotation;
        }
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
