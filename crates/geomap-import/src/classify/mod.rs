//! Per-tile classifiers: one function per raster theme, all sharing the
//! [`TileRasterFn`] signature.
//!
//! Each classifier reads the three channels of the pixel projected onto a
//! tile and applies at most a handful of grid mutations. Channel values
//! below [`MID_CUTOFF`](crate::MID_CUTOFF) usually mean "leave alone", so an
//! all-black raster never changes the map.

mod desert;
mod fields;
mod snow;
mod terrain;
mod trees;
mod tropics;
mod water;

use std::fmt;
use std::str::FromStr;

use geomap_raster::Rgb;
use geomap_world::{ClearGround, ParseSettingError, TileIndex, TileKind, TreeGround};

use crate::context::RasterContext;

pub use desert::apply_desert;
pub use fields::apply_fields;
pub use snow::apply_snow;
pub use terrain::apply_terrain;
pub use trees::apply_trees;
pub use tropics::apply_tropics;
pub use water::apply_water;

/// A per-tile classifier.
pub type TileRasterFn = fn(&mut RasterContext<'_>, Rgb, TileIndex);

/// What a raster layer describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RasterDataType {
    /// Grass density, rough land and rocks.
    Terrain,
    /// Farm fields.
    Fields,
    /// Canals, rivers and sea.
    Water,
    /// Tree growth, density and species.
    Trees,
    /// Snow cover.
    Snow,
    /// Desert ground and desert zone.
    Desert,
    /// Tropic climate zones.
    Tropics,
}

impl RasterDataType {
    pub const ALL: [RasterDataType; 7] = [
        RasterDataType::Terrain,
        RasterDataType::Fields,
        RasterDataType::Water,
        RasterDataType::Trees,
        RasterDataType::Snow,
        RasterDataType::Desert,
        RasterDataType::Tropics,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RasterDataType::Terrain => "terrain",
            RasterDataType::Fields => "fields",
            RasterDataType::Water => "water",
            RasterDataType::Trees => "trees",
            RasterDataType::Snow => "snow",
            RasterDataType::Desert => "desert",
            RasterDataType::Tropics => "tropics",
        }
    }

    /// The classifier that handles this kind of layer.
    pub fn classifier(self) -> TileRasterFn {
        match self {
            RasterDataType::Terrain => apply_terrain,
            RasterDataType::Fields => apply_fields,
            RasterDataType::Water => apply_water,
            RasterDataType::Trees => apply_trees,
            RasterDataType::Snow => apply_snow,
            RasterDataType::Desert => apply_desert,
            RasterDataType::Tropics => apply_tropics,
        }
    }
}

impl fmt::Display for RasterDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RasterDataType {
    type Err = ParseSettingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RasterDataType::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSettingError {
                setting: "raster layer",
                value: s.to_string(),
                expected: "terrain, fields, water, trees, snow, desert, tropics",
            })
    }
}

/// Replaces the ground of a clear or tree tile.
///
/// Tree tiles keep their trees where the ground has a tree counterpart;
/// rocks and fields cannot carry trees, so those tiles are cleared.
fn replace_ground(cx: &mut RasterContext<'_>, tile: TileIndex, ground: ClearGround, density: u8) {
    match cx.grid.tile_kind(tile) {
        TileKind::Clear => cx.grid.set_clear_ground_density(tile, ground, density),
        TileKind::Trees => match ground {
            ClearGround::Grass => cx.grid.set_tree_ground_density(tile, TreeGround::Grass, density),
            ClearGround::Rough => cx.grid.set_tree_ground_density(tile, TreeGround::Rough, density),
            ClearGround::Rocks | ClearGround::Fields => cx.grid.make_clear(tile, ground, density),
            ClearGround::Snow | ClearGround::Desert => {
                cx.grid.set_tree_ground_density(tile, TreeGround::SnowDesert, density)
            }
        },
        TileKind::Water | TileKind::Structure => {}
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use geomap_world::{Climate, Rotation, TileGrid, TileMap};

    use crate::context::{ImportSettings, RasterContext};
    use crate::random::RandomSource;

    use super::*;

    /// A 6×6 map and the inner tile `(2, 2)` most tests poke at.
    pub fn small_map(climate: Climate) -> (TileMap, TileIndex) {
        let map = TileMap::new(6, 6, climate);
        let tile = map.tile_xy(2, 2);
        (map, tile)
    }

    /// Runs `classifier` on one tile.
    pub fn classify(
        map: &mut TileMap,
        rng: &mut dyn RandomSource,
        climate: Climate,
        classifier: TileRasterFn,
        pixel: Rgb,
        tile: TileIndex,
    ) {
        let settings = ImportSettings::new(climate, Rotation::CounterClockwise);
        let mut cx = RasterContext::new(map, rng, &settings);
        classifier(&mut cx, pixel, tile);
    }
}
