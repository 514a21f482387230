//! Terrain layer: rocks, rough land and grass density.

use geomap_raster::Rgb;
use geomap_world::{ClearGround, TileIndex, TileKind};

use super::replace_ground;
use crate::context::RasterContext;
use crate::gradient::{Gradient, LOWER_CUTOFF, MID_CUTOFF, UPPER_CUTOFF};

/// Red: bright means bare. Level 3 (full grass) is left as is.
const GRASS: Gradient = Gradient::new(3, UPPER_CUTOFF, LOWER_CUTOFF);
const PRESENT: Gradient = Gradient::new(1, LOWER_CUTOFF, UPPER_CUTOFF);

/// Red thins out grass, green adds rough land, blue adds rocks.
///
/// Later channels win: a pixel with both green and blue set ends up rocky.
pub fn apply_terrain(cx: &mut RasterContext<'_>, pixel: Rgb, tile: TileIndex) {
    if !matches!(cx.grid.tile_kind(tile), TileKind::Clear | TileKind::Trees) {
        return;
    }

    if pixel.r >= MID_CUTOFF {
        let density = GRASS.sample(pixel.r, cx.rng);
        if density < 3 {
            replace_ground(cx, tile, ClearGround::Grass, density as u8);
        }
    }

    if pixel.g >= MID_CUTOFF && PRESENT.sample(pixel.g, cx.rng) != 0 {
        replace_ground(cx, tile, ClearGround::Rough, 3);
    }

    if pixel.b >= MID_CUTOFF && PRESENT.sample(pixel.b, cx.rng) != 0 {
        replace_ground(cx, tile, ClearGround::Rocks, 3);
    }
}

#[cfg(test)]
mod tests {
    use geomap_world::{Climate, Surface, TileGrid, TileMap, TreeGround, TreeType};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::classify::test_support::{classify, small_map};
    use crate::random::FixedRandom;

    fn run(map: &mut TileMap, pixel: Rgb, tile: TileIndex) {
        classify(map, &mut FixedRandom::lowest(), Climate::Temperate, apply_terrain, pixel, tile);
    }

    fn density(map: &TileMap, tile: TileIndex) -> u8 {
        match map.tile(tile).surface {
            Surface::Clear(clear) => clear.density,
            Surface::Trees(trees) => trees.density,
            other => panic!("unexpected surface {other:?}"),
        }
    }

    #[test]
    fn test_dark_red_leaves_ground_alone() {
        let (mut map, tile) = small_map(Climate::Temperate);
        let before = map.clone();
        run(&mut map, Rgb::new(0x0f, 0, 0), tile);
        assert_eq!(map, before);
    }

    #[test]
    fn test_bright_red_gives_bare_grass() {
        let (mut map, tile) = small_map(Climate::Temperate);
        run(&mut map, Rgb::new(0xf0, 0, 0), tile);
        assert_eq!(map.clear_ground(tile), Some(ClearGround::Grass));
        assert_eq!(density(&map, tile), 0);
    }

    #[test]
    fn test_red_thins_grass_gradually() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut previous = 0u64;
        // Sum densities over many tiles per red value; the total must fall.
        for red in [0x40u8, 0x80, 0xc0, 0xf0] {
            let mut map = TileMap::new(34, 34, Climate::Temperate);
            for y in 1..33 {
                for x in 1..33 {
                    let tile = map.tile_xy(x, y);
                    classify(&mut map, &mut rng, Climate::Temperate, apply_terrain, Rgb::new(red, 0, 0), tile);
                }
            }
            let total: u64 = map
                .iter()
                .map(|(_, t)| match t.surface {
                    Surface::Clear(c) => 3 - c.density as u64,
                    _ => 0,
                })
                .sum();
            assert!(total >= previous, "red {red:#x}: bareness {total} < {previous}");
            previous = total;
        }
    }

    #[test]
    fn test_green_makes_rough_and_blue_wins() {
        let (mut map, tile) = small_map(Climate::Temperate);
        let other = map.tile_xy(3, 3);

        run(&mut map, Rgb::new(0, 0xff, 0), tile);
        assert_eq!(map.clear_ground(tile), Some(ClearGround::Rough));

        run(&mut map, Rgb::new(0, 0xff, 0xff), other);
        assert_eq!(map.clear_ground(other), Some(ClearGround::Rocks));
    }

    #[test]
    fn test_faint_green_below_cutoff_is_ignored() {
        let (mut map, tile) = small_map(Climate::Temperate);
        classify(&mut map, &mut FixedRandom::highest(), Climate::Temperate, apply_terrain, Rgb::new(0, 0x0f, 0x0f), tile);
        assert_eq!(map.clear_ground(tile), Some(ClearGround::Grass));
        assert_eq!(density(&map, tile), 3);
    }

    #[test]
    fn test_tree_tile_keeps_trees_on_rough() {
        let (mut map, tile) = small_map(Climate::Temperate);
        map.plant_trees(tile, TreeType(4), 2, 3);
        run(&mut map, Rgb::new(0, 0xff, 0), tile);
        assert_eq!(map.tree_ground(tile), Some(TreeGround::Rough));
    }

    #[test]
    fn test_water_is_never_touched() {
        let (mut map, tile) = small_map(Climate::Temperate);
        map.make_sea(tile);
        let before = map.clone();
        run(&mut map, Rgb::new(0xff, 0xff, 0xff), tile);
        assert_eq!(map, before);
    }
}
