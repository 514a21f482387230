//! `geomap`: builds a flat map and paints raster layers onto it.

mod layer;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use geomap_config::{CliArgs, Config, default_config_dir};
use geomap_import::{
    DirtyFlag, ImportSettings, RasterContext, import_rng, load_raster, probe_raster,
};
use geomap_raster::{FileRasterSource, RasterFormat, Subdirectory};
use geomap_world::TileMap;
use tracing::{error, info};

use crate::layer::{LayerArg, format_for};

/// Apply raster images to a tile map.
#[derive(Parser, Debug)]
#[command(name = "geomap", about = "Apply raster images to a tile map")]
struct Cli {
    #[command(flatten)]
    common: CliArgs,

    /// Raster layer as <theme>=<path>; repeat to stack layers in order.
    #[arg(long = "layer", value_name = "THEME=PATH")]
    layers: Vec<LayerArg>,

    /// Container format of every layer (defaults to the file extension).
    #[arg(long)]
    format: Option<RasterFormat>,

    /// Print the size of a raster and exit.
    #[arg(long, value_name = "PATH", conflicts_with = "layers")]
    probe: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Resolve config directory
    let config_dir = cli
        .common
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from(".geomap"));

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&cli.common);

    let log_dir = config_dir.join("logs");
    geomap_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;
    let source = FileRasterSource::new(config.import.search_paths.clone());

    if let Some(locator) = &cli.probe {
        let format = format_for(locator, cli.format)?;
        let (width, height) = probe_raster(&source, format, locator, Subdirectory::Geomap)?;
        println!("{width}x{height}");
        return Ok(());
    }

    let world = &config.world;
    let settings = ImportSettings::new(world.climate, world.rotation);
    let mut map = TileMap::new(world.map_size_x, world.map_size_y, world.climate);
    let mut screen = DirtyFlag::new();
    info!(
        "Created {}x{} {} map, rotation {}",
        world.map_size_x, world.map_size_y, world.climate, world.rotation
    );

    for layer in &cli.layers {
        let format = layer.format(cli.format)?;
        let mut rng = import_rng(world.seed, layer.kind);
        let mut cx = RasterContext::new(&mut map, &mut rng, &settings);
        load_raster(
            &source,
            format,
            layer.kind,
            &layer.locator,
            Subdirectory::Geomap,
            &mut cx,
            &mut screen,
        )?;
    }

    if screen.take() {
        info!("Map changed, repaint requested");
    }
    let census = map.census();
    info!("Tile census: {census}");
    println!("{census}");
    Ok(())
}
