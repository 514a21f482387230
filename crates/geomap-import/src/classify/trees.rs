//! Trees layer: growth stage from red, tree count from green, species from blue.

use geomap_raster::Rgb;
use geomap_world::{TileIndex, TreeType};

use crate::context::RasterContext;
use crate::gradient::{Gradient, LOWER_CUTOFF, MID_CUTOFF, UPPER_CUTOFF};

/// Growth stage of freshly planted trees without a red channel.
const DEFAULT_GROWTH: i32 = 3;

const GROWTH: Gradient = Gradient::new(6, LOWER_CUTOFF, UPPER_CUTOFF);
const DENSITY: Gradient = Gradient::new(4, LOWER_CUTOFF, UPPER_CUTOFF);

/// Red sets the growth stage, green the tree count and blue the species.
///
/// A dark blue channel lets the grid pick a species suitable for the tile.
pub fn apply_trees(cx: &mut RasterContext<'_>, pixel: Rgb, tile: TileIndex) {
    let growth = if pixel.r < MID_CUTOFF {
        DEFAULT_GROWTH
    } else {
        GROWTH.sample(pixel.r, cx.rng)
    };

    let count = DENSITY.sample(pixel.g, cx.rng) - 1;
    if count < 0 {
        return;
    }

    let species = if pixel.b < MID_CUTOFF {
        let seed = (cx.rng.next_bits() >> 24) as u8;
        cx.grid.random_tree_type(tile, seed)
    } else {
        let range = cx.settings.species.range(cx.settings.climate);
        let index = ((pixel.b >> 4) - 1) % range.count();
        TreeType::offset(range.base(), index)
    };

    if !species.is_valid() {
        return;
    }

    if cx.grid.can_plant_trees(tile, true) {
        cx.grid.plant_trees(tile, species, count as u8, growth as u8);
    }
}
