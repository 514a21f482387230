//! Tropics layer: desert, rainforest and normal climate zones.

use geomap_raster::Rgb;
use geomap_world::{TileIndex, TropicZone};

use crate::context::RasterContext;
use crate::gradient::UPPER_CUTOFF;

/// Red marks desert, green rainforest, blue resets to normal. Only the
/// first bright channel counts.
pub fn apply_tropics(cx: &mut RasterContext<'_>, pixel: Rgb, tile: TileIndex) {
    let zone = if pixel.r > UPPER_CUTOFF {
        TropicZone::Desert
    } else if pixel.g > UPPER_CUTOFF {
        TropicZone::Rainforest
    } else if pixel.b > UPPER_CUTOFF {
        TropicZone::Normal
    } else {
        return;
    };
    cx.grid.set_tropic_zone(tile, zone);
}
