//! Fields layer: farmland with a field type picked from red.

use geomap_raster::Rgb;
use geomap_world::TileIndex;

use crate::context::RasterContext;
use crate::gradient::{Gradient, LOWER_CUTOFF, UPPER_CUTOFF};

const PRESENT: Gradient = Gradient::new(1, LOWER_CUTOFF, UPPER_CUTOFF);

/// Number of distinct field types.
const FIELD_TYPES: i32 = 9;

/// Red picks the field type in steps of 16, green decides whether a field
/// is placed at all.
pub fn apply_fields(cx: &mut RasterContext<'_>, pixel: Rgb, tile: TileIndex) {
    if pixel.r < LOWER_CUTOFF {
        return;
    }

    // Red 0x0f falls in bucket 0 and wraps around to the last type of the
    // cycle, same as any other out-of-range bucket.
    let field_type = (i32::from(pixel.r >> 4) - 1).rem_euclid(FIELD_TYPES);

    if PRESENT.sample(pixel.g, cx.rng) != 0 {
        cx.grid.make_field(tile, field_type as u8);
    }
}
