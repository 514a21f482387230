//! Desert layer: desert ground and the desert tropic zone.

use geomap_raster::Rgb;
use geomap_world::{ClearGround, TileIndex, TropicZone};

use super::replace_ground;
use crate::context::RasterContext;
use crate::gradient::{Gradient, LOWER_CUTOFF, UPPER_CUTOFF};

const DENSITY: Gradient = Gradient::new(2, LOWER_CUTOFF, UPPER_CUTOFF);

/// Red lays desert ground at half or full density; bright green also marks
/// the tile as desert zone.
pub fn apply_desert(cx: &mut RasterContext<'_>, pixel: Rgb, tile: TileIndex) {
    let density = DENSITY.sample(pixel.r, cx.rng) * 2 - 1;
    if density < 0 {
        return;
    }

    replace_ground(cx, tile, ClearGround::Desert, density as u8);

    if pixel.g > UPPER_CUTOFF {
        cx.grid.set_tropic_zone(tile, TropicZone::Desert);
    }
}

#[cfg(test)]
mod tests {
    use geomap_world::{Climate, Surface, TileGrid, TileMap, TreeGround, TreeType};

    use super::*;
    use crate::classify::test_support::{classify, small_map};
    use crate::random::FixedRandom;

    fn run(map: &mut TileMap, pixel: Rgb, tile: TileIndex) {
        classify(map, &mut FixedRandom::lowest(), Climate::Tropic, apply_desert, pixel, tile);
    }

    fn clear_density(map: &TileMap, tile: TileIndex) -> u8 {
        match map.tile(tile).surface {
            Surface::Clear(clear) => clear.density,
            other => panic!("unexpected surface {other:?}"),
        }
    }

    #[test]
    fn test_density_is_half_or_full() {
        let (mut map, full) = small_map(Climate::Tropic);
        let half = map.tile_xy(3, 3);

        run(&mut map, Rgb::new(0xf0, 0, 0), full);
        // Middle of the ramp, inside the fixed zone of level 1.
        run(&mut map, Rgb::new(0x0f + 113, 0, 0), half);

        assert_eq!(map.clear_ground(full), Some(ClearGround::Desert));
        assert_eq!(clear_density(&map, full), 3);
        assert_eq!(map.clear_ground(half), Some(ClearGround::Desert));
        assert_eq!(clear_density(&map, half), 1);
    }

    #[test]
    fn test_dark_red_leaves_tile_even_with_green() {
        let (mut map, tile) = small_map(Climate::Tropic);
        let before = map.clone();
        run(&mut map, Rgb::new(0x0f, 0xff, 0), tile);
        assert_eq!(map, before);
    }

    #[test]
    fn test_bright_green_sets_desert_zone() {
        let (mut map, tile) = small_map(Climate::Tropic);
        let other = map.tile_xy(3, 3);
        run(&mut map, Rgb::new(0xff, 0xf1, 0), tile);
        run(&mut map, Rgb::new(0xff, 0xf0, 0), other);
        assert_eq!(map.tropic_zone(tile), TropicZone::Desert);
        assert_eq!(map.tropic_zone(other), TropicZone::Normal);
    }

    #[test]
    fn test_trees_get_desert_ground() {
        let (mut map, tile) = small_map(Climate::Tropic);
        map.plant_trees(tile, TreeType::SUB_TROPICAL, 1, 3);
        run(&mut map, Rgb::new(0xff, 0, 0), tile);
        assert_eq!(map.tree_ground(tile), Some(TreeGround::SnowDesert));
    }
}
