//! World grid model: tile addressing, ground and vegetation kinds, game settings,
//! and the [`TileGrid`] mutation capability consumed by raster import.

pub mod grid;
pub mod settings;
pub mod tile;
pub mod tile_map;
pub mod tree;

pub use grid::TileGrid;
pub use settings::{Climate, ParseSettingError, Rotation};
pub use tile::{ClearGround, Owner, Slope, TileIndex, TileKind, TreeGround, TropicZone, WaterClass};
pub use tile_map::{ClearTile, Surface, Tile, TileCensus, TileMap, TreeTile, WaterTile};
pub use tree::TreeType;
