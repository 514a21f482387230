//! Water layer: canals, rivers and sea, tried in that order.

use geomap_raster::Rgb;
use geomap_world::{Owner, TileIndex};

use crate::context::RasterContext;
use crate::gradient::UPPER_CUTOFF;

/// Red builds canals, green rivers, blue sea, in that order of priority.
///
/// Canals need a flat tile. A canal pixel that lands on a half-tile slope
/// still becomes a river when green is set as well; on any other slope the
/// pixel is dropped without trying the lower priorities.
pub fn apply_water(cx: &mut RasterContext<'_>, pixel: Rgb, tile: TileIndex) {
    let slope = cx.grid.slope(tile);

    if pixel.r >= UPPER_CUTOFF {
        if slope.is_flat() {
            let owner = match cx.grid.owner(tile) {
                Owner::WATER => Owner::NONE,
                owner => owner,
            };
            let bits = cx.rng.next_bits();
            cx.grid.make_canal(tile, owner, bits);
        } else if pixel.g >= UPPER_CUTOFF && slope.is_halftile() {
            let bits = cx.rng.next_bits();
            cx.grid.make_river(tile, bits);
        }
    } else if pixel.g >= UPPER_CUTOFF {
        if slope.is_flat() || slope.is_halftile() {
            let bits = cx.rng.next_bits();
            cx.grid.make_river(tile, bits);
        }
    } else if pixel.b >= UPPER_CUTOFF && slope.is_flat() && cx.grid.height(tile) == 0 {
        cx.grid.make_sea(tile);
    }
}

#[cfg(test)]
mod tests {
    use geomap_world::{Climate, Slope, Surface, TileGrid, TileKind, TileMap, WaterClass, WaterTile};

    use super::*;
    use crate::classify::test_support::{classify, small_map};
    use crate::random::FixedRandom;

    fn run(map: &mut TileMap, pixel: Rgb, tile: TileIndex) {
        classify(map, &mut FixedRandom(0xC0FF_EE00), Climate::Temperate, apply_water, pixel, tile);
    }

    fn water_class(map: &TileMap, tile: TileIndex) -> Option<WaterClass> {
        match map.tile(tile).surface {
            Surface::Water(water) => Some(water.class),
            _ => None,
        }
    }

    #[test]
    fn test_canal_wins_over_river_on_flat_tile() {
        let (mut map, tile) = small_map(Climate::Temperate);
        map.tile_mut(tile).owner = Owner(2);
        run(&mut map, Rgb::new(255, 255, 0), tile);

        assert_eq!(
            map.tile(tile).surface,
            Surface::Water(WaterTile {
                class: WaterClass::Canal,
                random_bits: 0xC0FF_EE00,
            })
        );
        assert_eq!(map.owner(tile), Owner(2));
    }

    #[test]
    fn test_canal_on_water_owned_tile_has_no_owner() {
        let (mut map, tile) = small_map(Climate::Temperate);
        map.tile_mut(tile).owner = Owner::WATER;
        run(&mut map, Rgb::new(250, 0, 0), tile);
        assert_eq!(water_class(&map, tile), Some(WaterClass::Canal));
        assert_eq!(map.owner(tile), Owner::NONE);
    }

    #[test]
    fn test_canal_on_halftile_falls_back_to_river() {
        let (mut map, tile) = small_map(Climate::Temperate);
        map.tile_mut(tile).slope = Slope::halftile(Slope::N);
        run(&mut map, Rgb::new(255, 255, 0), tile);
        assert_eq!(water_class(&map, tile), Some(WaterClass::River));

        // Without green the canal pixel does nothing.
        let other = map.tile_xy(3, 3);
        map.tile_mut(other).slope = Slope::halftile(Slope::N);
        run(&mut map, Rgb::new(255, 0, 255), other);
        assert_eq!(map.tile_kind(other), TileKind::Clear);
    }

    #[test]
    fn test_canal_on_sloped_tile_skips_lower_priorities() {
        let (mut map, tile) = small_map(Climate::Temperate);
        map.tile_mut(tile).slope = Slope::N;
        let before = map.clone();
        run(&mut map, Rgb::new(255, 255, 255), tile);
        assert_eq!(map, before);
    }

    #[test]
    fn test_river_on_flat_and_halftile_only() {
        let (mut map, flat) = small_map(Climate::Temperate);
        let half = map.tile_xy(3, 2);
        let sloped = map.tile_xy(2, 3);
        map.tile_mut(half).slope = Slope::halftile(Slope::E);
        map.tile_mut(sloped).slope = Slope::E;

        for tile in [flat, half, sloped] {
            run(&mut map, Rgb::new(0, 240, 0), tile);
        }
        assert_eq!(water_class(&map, flat), Some(WaterClass::River));
        assert_eq!(water_class(&map, half), Some(WaterClass::River));
        assert_eq!(water_class(&map, sloped), None);
        assert_eq!(map.owner(flat), Owner::WATER);
    }

    #[test]
    fn test_sea_needs_flat_sea_level() {
        let (mut map, low) = small_map(Climate::Temperate);
        let high = map.tile_xy(3, 3);
        map.tile_mut(high).height = 1;

        run(&mut map, Rgb::new(0, 0, 255), low);
        run(&mut map, Rgb::new(0, 0, 255), high);

        assert_eq!(water_class(&map, low), Some(WaterClass::Sea));
        assert_eq!(water_class(&map, high), None);
    }

    #[test]
    fn test_below_cutoff_does_nothing() {
        let (mut map, tile) = small_map(Climate::Temperate);
        let before = map.clone();
        run(&mut map, Rgb::new(239, 239, 239), tile);
        assert_eq!(map, before);
    }
}
