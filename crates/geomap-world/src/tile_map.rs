//! Dense in-memory world grid.
//!
//! [`TileMap`] stores one [`Tile`] per cell in row-major order and implements
//! [`TileGrid`] with the same rules a full game would apply: trees only grow
//! on clear land, canals keep their builder as owner, snow remembers whether
//! the ground underneath was rough.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::TileGrid;
use crate::settings::Climate;
use crate::tile::{
    ClearGround, Owner, Slope, TileIndex, TileKind, TreeGround, TropicZone, WaterClass,
};
use crate::tree::TreeType;

// ---------------------------------------------------------------------------
// Tile contents
// ---------------------------------------------------------------------------

/// Contents of a clear tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearTile {
    /// Raw ground. Never [`ClearGround::Snow`]; snow is tracked by `snow`.
    pub ground: ClearGround,
    /// Ground density, `0..=3`.
    pub density: u8,
    /// Whether snow covers the ground.
    pub snow: bool,
    /// Field type, only meaningful for [`ClearGround::Fields`].
    pub field_type: u8,
}

impl ClearTile {
    pub fn grass(density: u8) -> Self {
        Self {
            ground: ClearGround::Grass,
            density,
            snow: false,
            field_type: 0,
        }
    }

    /// Visible ground, reporting snow when the tile is snowed over.
    pub fn visible_ground(&self) -> ClearGround {
        if self.snow {
            ClearGround::Snow
        } else {
            self.ground
        }
    }
}

/// Contents of a tile with trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeTile {
    pub species: TreeType,
    /// Number of trees minus one, `0..=3`.
    pub count: u8,
    /// Growth stage, `0..=6`.
    pub growth: u8,
    pub ground: TreeGround,
    pub density: u8,
}

/// Contents of a water tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterTile {
    pub class: WaterClass,
    /// Animation variety bits supplied on construction.
    pub random_bits: u32,
}

/// What a tile is covered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    Clear(ClearTile),
    Trees(TreeTile),
    Water(WaterTile),
    Structure,
}

impl Surface {
    pub fn kind(&self) -> TileKind {
        match self {
            Surface::Clear(_) => TileKind::Clear,
            Surface::Trees(_) => TileKind::Trees,
            Surface::Water(_) => TileKind::Water,
            Surface::Structure => TileKind::Structure,
        }
    }
}

/// A single map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub height: u8,
    pub slope: Slope,
    pub owner: Owner,
    pub zone: TropicZone,
    pub surface: Surface,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            height: 0,
            slope: Slope::FLAT,
            owner: Owner::NONE,
            zone: TropicZone::Normal,
            surface: Surface::Clear(ClearTile::grass(3)),
        }
    }
}

// ---------------------------------------------------------------------------
// TileMap
// ---------------------------------------------------------------------------

/// A rectangular map of `size_x × size_y` tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    size_x: u32,
    size_y: u32,
    climate: Climate,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Creates a flat, sea-level map covered in full grass.
    ///
    /// # Panics
    ///
    /// Panics if either side is zero.
    pub fn new(size_x: u32, size_y: u32, climate: Climate) -> Self {
        assert!(size_x > 0 && size_y > 0, "map sides must be non-zero");
        Self {
            size_x,
            size_y,
            climate,
            tiles: vec![Tile::default(); size_x as usize * size_y as usize],
        }
    }

    /// Coordinates of a tile index.
    pub fn xy(&self, tile: TileIndex) -> (u32, u32) {
        (tile.0 % self.size_x, tile.0 / self.size_x)
    }

    pub fn tile(&self, tile: TileIndex) -> &Tile {
        &self.tiles[tile.0 as usize]
    }

    pub fn tile_mut(&mut self, tile: TileIndex) -> &mut Tile {
        &mut self.tiles[tile.0 as usize]
    }

    /// Iterates over all tiles with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (TileIndex, &Tile)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(idx, tile)| (TileIndex(idx as u32), tile))
    }

    /// Counts tiles by visible surface.
    pub fn census(&self) -> TileCensus {
        let mut census = TileCensus::default();
        for (_, tile) in self.iter() {
            match tile.surface {
                Surface::Clear(clear) => match clear.visible_ground() {
                    ClearGround::Grass => census.grass += 1,
                    ClearGround::Rough => census.rough += 1,
                    ClearGround::Rocks => census.rocks += 1,
                    ClearGround::Fields => census.fields += 1,
                    ClearGround::Snow => census.snow += 1,
                    ClearGround::Desert => census.desert += 1,
                },
                Surface::Trees(_) => census.trees += 1,
                Surface::Water(water) => match water.class {
                    WaterClass::Sea => census.sea += 1,
                    WaterClass::Canal => census.canal += 1,
                    WaterClass::River => census.river += 1,
                },
                Surface::Structure => census.structures += 1,
            }
            match tile.zone {
                TropicZone::Normal => {}
                TropicZone::Desert => census.desert_zone += 1,
                TropicZone::Rainforest => census.rainforest_zone += 1,
            }
        }
        census
    }
}

impl TileGrid for TileMap {
    fn size_x(&self) -> u32 {
        self.size_x
    }

    fn size_y(&self) -> u32 {
        self.size_y
    }

    fn tile_xy(&self, x: u32, y: u32) -> TileIndex {
        debug_assert!(x < self.size_x && y < self.size_y);
        TileIndex(y * self.size_x + x)
    }

    fn is_inner_tile(&self, tile: TileIndex) -> bool {
        let (x, y) = self.xy(tile);
        x > 0 && y > 0 && x < self.size_x - 1 && y < self.size_y - 1
    }

    fn climate(&self) -> Climate {
        self.climate
    }

    fn tile_kind(&self, tile: TileIndex) -> TileKind {
        self.tile(tile).surface.kind()
    }

    fn slope(&self, tile: TileIndex) -> Slope {
        self.tile(tile).slope
    }

    fn height(&self, tile: TileIndex) -> u8 {
        self.tile(tile).height
    }

    fn owner(&self, tile: TileIndex) -> Owner {
        self.tile(tile).owner
    }

    fn tropic_zone(&self, tile: TileIndex) -> TropicZone {
        self.tile(tile).zone
    }

    fn clear_ground(&self, tile: TileIndex) -> Option<ClearGround> {
        match self.tile(tile).surface {
            Surface::Clear(clear) => Some(clear.visible_ground()),
            _ => None,
        }
    }

    fn tree_ground(&self, tile: TileIndex) -> Option<TreeGround> {
        match self.tile(tile).surface {
            Surface::Trees(trees) => Some(trees.ground),
            _ => None,
        }
    }

    fn set_clear_ground_density(&mut self, tile: TileIndex, ground: ClearGround, density: u8) {
        if let Surface::Clear(clear) = &mut self.tile_mut(tile).surface {
            if ground == ClearGround::Snow {
                clear.snow = true;
            } else {
                clear.ground = ground;
                clear.snow = false;
            }
            clear.density = density;
        }
    }

    fn set_tree_ground_density(&mut self, tile: TileIndex, ground: TreeGround, density: u8) {
        if let Surface::Trees(trees) = &mut self.tile_mut(tile).surface {
            trees.ground = ground;
            trees.density = density;
        }
    }

    fn make_clear(&mut self, tile: TileIndex, ground: ClearGround, density: u8) {
        let t = self.tile_mut(tile);
        if !matches!(t.surface, Surface::Clear(_) | Surface::Trees(_)) {
            return;
        }
        let (ground, snow) = match ground {
            ClearGround::Snow => (ClearGround::Grass, true),
            other => (other, false),
        };
        t.surface = Surface::Clear(ClearTile {
            ground,
            density,
            snow,
            field_type: 0,
        });
    }

    fn make_snow(&mut self, tile: TileIndex, density: u8) {
        if let Surface::Clear(clear) = &mut self.tile_mut(tile).surface {
            if clear.ground != ClearGround::Rough {
                clear.ground = ClearGround::Grass;
            }
            clear.snow = true;
            clear.density = density;
        }
    }

    fn make_field(&mut self, tile: TileIndex, field_type: u8) {
        let t = self.tile_mut(tile);
        if !matches!(t.surface, Surface::Clear(_) | Surface::Trees(_)) {
            return;
        }
        t.surface = Surface::Clear(ClearTile {
            ground: ClearGround::Fields,
            density: 3,
            snow: false,
            field_type,
        });
    }

    fn make_canal(&mut self, tile: TileIndex, owner: Owner, random_bits: u32) {
        let t = self.tile_mut(tile);
        if t.surface == Surface::Structure {
            return;
        }
        t.owner = owner;
        t.surface = Surface::Water(WaterTile {
            class: WaterClass::Canal,
            random_bits,
        });
    }

    fn make_river(&mut self, tile: TileIndex, random_bits: u32) {
        let t = self.tile_mut(tile);
        if t.surface == Surface::Structure {
            return;
        }
        t.owner = Owner::WATER;
        t.surface = Surface::Water(WaterTile {
            class: WaterClass::River,
            random_bits,
        });
    }

    fn make_sea(&mut self, tile: TileIndex) {
        let t = self.tile_mut(tile);
        if t.surface == Surface::Structure {
            return;
        }
        t.owner = Owner::WATER;
        t.surface = Surface::Water(WaterTile {
            class: WaterClass::Sea,
            random_bits: 0,
        });
    }

    fn set_tropic_zone(&mut self, tile: TileIndex, zone: TropicZone) {
        self.tile_mut(tile).zone = zone;
    }

    fn can_plant_trees(&self, tile: TileIndex, allow_desert: bool) -> bool {
        match self.tile(tile).surface {
            Surface::Clear(clear) => {
                !matches!(clear.ground, ClearGround::Fields | ClearGround::Rocks)
                    && (allow_desert || clear.visible_ground() != ClearGround::Desert)
            }
            _ => false,
        }
    }

    fn plant_trees(&mut self, tile: TileIndex, species: TreeType, count: u8, growth: u8) {
        debug_assert!(species.is_valid());
        let t = self.tile_mut(tile);
        let Surface::Clear(clear) = t.surface else {
            return;
        };
        let (ground, density) = match (clear.snow, clear.ground) {
            (true, ClearGround::Rough) => (TreeGround::RoughSnow, clear.density),
            (true, _) => (TreeGround::SnowDesert, clear.density),
            (false, ClearGround::Grass) => (TreeGround::Grass, clear.density),
            (false, ClearGround::Rough) => (TreeGround::Rough, 3),
            (false, _) => (TreeGround::SnowDesert, clear.density),
        };
        t.surface = Surface::Trees(TreeTile {
            species,
            count,
            growth,
            ground,
            density,
        });
    }

    fn random_tree_type(&self, tile: TileIndex, seed: u8) -> TreeType {
        let pick = |base: TreeType, count: u8| {
            TreeType::offset(base, ((seed as u32 * count as u32) >> 8) as u8)
        };
        match self.climate {
            Climate::Temperate => pick(TreeType::TEMPERATE, TreeType::TEMPERATE_COUNT),
            Climate::Arctic => pick(TreeType::SUB_ARCTIC, TreeType::SUB_ARCTIC_COUNT),
            Climate::Toyland => pick(TreeType::TOYLAND, TreeType::TOYLAND_COUNT),
            Climate::Tropic => match self.tropic_zone(tile) {
                TropicZone::Normal => pick(TreeType::SUB_TROPICAL, TreeType::SUB_TROPICAL_COUNT),
                TropicZone::Desert if seed > 12 => TreeType::INVALID,
                TropicZone::Desert => TreeType::CACTUS,
                TropicZone::Rainforest => pick(TreeType::RAINFOREST, TreeType::RAINFOREST_COUNT),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Census
// ---------------------------------------------------------------------------

/// Tile counts by visible surface, plus non-normal tropic zones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCensus {
    pub grass: u64,
    pub rough: u64,
    pub rocks: u64,
    pub fields: u64,
    pub snow: u64,
    pub desert: u64,
    pub trees: u64,
    pub sea: u64,
    pub canal: u64,
    pub river: u64,
    pub structures: u64,
    pub desert_zone: u64,
    pub rainforest_zone: u64,
}

impl fmt::Display for TileCensus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grass={} rough={} rocks={} fields={} snow={} desert={} trees={} \
             sea={} canal={} river={} structures={} desert_zone={} rainforest_zone={}",
            self.grass,
            self.rough,
            self.rocks,
            self.fields,
            self.snow,
            self.desert,
            self.trees,
            self.sea,
            self.canal,
            self.river,
            self.structures,
            self.desert_zone,
            self.rainforest_zone,
        )
    }
}
