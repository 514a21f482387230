//! Per-tile value types shared by the grid trait and its implementations.

use serde::{Deserialize, Serialize};

/// Opaque identifier of one tile on the map.
///
/// Only the grid that issued an index knows how it maps to coordinates;
/// raster import passes it through unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileIndex(pub u32);

/// Coarse classification of what occupies a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    /// Bare land with some ground cover.
    Clear,
    /// Land with trees growing on it.
    Trees,
    /// Sea, canal or river.
    Water,
    /// Anything raster import must never touch (buildings, track, industry).
    Structure,
}

/// Ground cover of a clear tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClearGround {
    /// Grass; density 0 is bare dirt, 3 is full grass.
    Grass,
    Rough,
    Rocks,
    Fields,
    Snow,
    Desert,
}

/// Ground cover underneath trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeGround {
    Grass,
    Rough,
    /// Snow or desert, depending on the climate.
    SnowDesert,
    Shore,
    /// Snow that is rough underneath.
    RoughSnow,
}

/// Climate zone tag used by the tropic climate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TropicZone {
    #[default]
    Normal,
    Desert,
    Rainforest,
}

/// Kind of water on a water tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaterClass {
    Sea,
    Canal,
    River,
}

/// Owner of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owner(pub u8);

impl Owner {
    /// A town.
    pub const TOWN: Owner = Owner(0x0F);
    /// Nobody.
    pub const NONE: Owner = Owner(0x10);
    /// The water itself (sea and rivers).
    pub const WATER: Owner = Owner(0x11);

    /// Returns `true` for company owners (`0..TOWN`).
    pub fn is_company(self) -> bool {
        self.0 < Self::TOWN.0
    }
}

/// Slope of a tile, encoded as raised corners plus steep/half-tile flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slope(pub u8);

impl Slope {
    pub const FLAT: Slope = Slope(0x00);
    pub const W: Slope = Slope(0x01);
    pub const S: Slope = Slope(0x02);
    pub const E: Slope = Slope(0x04);
    pub const N: Slope = Slope(0x08);
    /// Set when one corner is raised by two height levels.
    pub const STEEP: u8 = 0x10;
    /// Set when only half of the tile is sloped (foundations).
    pub const HALFTILE: u8 = 0x20;

    const CORNERS: u8 = 0x0F;

    /// Builds a half-tile slope from a corner slope.
    pub fn halftile(corners: Slope) -> Slope {
        Slope((corners.0 & Self::CORNERS) | Self::HALFTILE)
    }

    pub fn is_flat(self) -> bool {
        self == Self::FLAT
    }

    pub fn is_steep(self) -> bool {
        self.0 & Self::STEEP != 0
    }

    pub fn is_halftile(self) -> bool {
        self.0 & Self::HALFTILE != 0
    }
}
