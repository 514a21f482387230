//! Snow layer: snow depth on clear and tree ground.

use geomap_raster::Rgb;
use geomap_world::{ClearGround, TileIndex, TileKind, TreeGround};

use crate::context::RasterContext;
use crate::gradient::{Gradient, LOWER_CUTOFF, UPPER_CUTOFF};

const DENSITY: Gradient = Gradient::new(4, LOWER_CUTOFF, UPPER_CUTOFF);

/// Blue sets snow depth on clear land and snows over the ground under trees.
pub fn apply_snow(cx: &mut RasterContext<'_>, pixel: Rgb, tile: TileIndex) {
    let density = DENSITY.sample(pixel.b, cx.rng) - 1;
    if density < 0 {
        return;
    }
    let density = density as u8;

    match cx.grid.tile_kind(tile) {
        TileKind::Clear => {
            if cx.grid.clear_ground(tile) == Some(ClearGround::Snow) {
                cx.grid.set_clear_ground_density(tile, ClearGround::Snow, density);
            } else {
                cx.grid.make_snow(tile, density);
            }
        }
        TileKind::Trees => match cx.grid.tree_ground(tile) {
            Some(TreeGround::Grass | TreeGround::SnowDesert) => {
                cx.grid.set_tree_ground_density(tile, TreeGround::SnowDesert, density)
            }
            Some(TreeGround::Rough | TreeGround::RoughSnow) => {
                cx.grid.set_tree_ground_density(tile, TreeGround::RoughSnow, density)
            }
            Some(TreeGround::Shore) | None => {}
        },
        TileKind::Water | TileKind::Structure => {}
    }
}
