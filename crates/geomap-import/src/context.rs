//! Settings and collaborators shared by the projector and every classifier.

use geomap_world::{Climate, Rotation, TileGrid, TreeType};

use crate::random::RandomSource;

/// A contiguous, non-empty block of tree species.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpeciesRange {
    base: TreeType,
    count: u8,
}

impl SpeciesRange {
    /// A block of `count` species starting at `base`.
    ///
    /// Returns `None` when the block is empty or would run into
    /// [`TreeType::INVALID`].
    pub const fn new(base: TreeType, count: u8) -> Option<Self> {
        if count == 0 || base.0 as u16 + count as u16 > TreeType::INVALID.0 as u16 {
            return None;
        }
        Some(Self { base, count })
    }

    /// First species of the block.
    pub fn base(self) -> TreeType {
        self.base
    }

    /// Number of species in the block, at least one.
    pub fn count(self) -> u8 {
        self.count
    }
}

/// Which species a blue channel value selects, per climate.
///
/// Blue values are bucketed in steps of 16 and wrap around `count`, so
/// every value at or above [`MID_CUTOFF`](crate::MID_CUTOFF) names a species.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeSpeciesTable {
    pub temperate: SpeciesRange,
    pub arctic: SpeciesRange,
    pub tropic: SpeciesRange,
    pub toyland: SpeciesRange,
}

impl TreeSpeciesTable {
    pub fn range(&self, climate: Climate) -> SpeciesRange {
        match climate {
            Climate::Temperate => self.temperate,
            Climate::Arctic => self.arctic,
            Climate::Tropic => self.tropic,
            Climate::Toyland => self.toyland,
        }
    }
}

impl Default for TreeSpeciesTable {
    fn default() -> Self {
        Self {
            temperate: SpeciesRange {
                base: TreeType::TEMPERATE,
                count: TreeType::TEMPERATE_COUNT,
            },
            arctic: SpeciesRange {
                base: TreeType::SUB_ARCTIC,
                count: TreeType::SUB_ARCTIC_COUNT,
            },
            // Tropic rasters pick from the start of the rainforest block, wrapping
            // at the size of the sub-tropical block.
            tropic: SpeciesRange {
                base: TreeType::RAINFOREST,
                count: TreeType::SUB_TROPICAL_COUNT,
            },
            toyland: SpeciesRange {
                base: TreeType::TOYLAND,
                count: TreeType::TOYLAND_COUNT,
            },
        }
    }
}

/// Immutable game-creation settings read by an import pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImportSettings {
    pub climate: Climate,
    pub rotation: Rotation,
    pub species: TreeSpeciesTable,
}

impl ImportSettings {
    pub fn new(climate: Climate, rotation: Rotation) -> Self {
        Self {
            climate,
            rotation,
            species: TreeSpeciesTable::default(),
        }
    }
}

/// Everything a classifier may touch while handling one tile.
pub struct RasterContext<'a> {
    /// The map being modified; exclusively borrowed for the whole pass.
    pub grid: &'a mut dyn TileGrid,
    /// Jitter and species randomness.
    pub rng: &'a mut dyn RandomSource,
    pub settings: &'a ImportSettings,
}

impl<'a> RasterContext<'a> {
    pub fn new(
        grid: &'a mut dyn TileGrid,
        rng: &'a mut dyn RandomSource,
        settings: &'a ImportSettings,
    ) -> Self {
        Self {
            grid,
            rng,
            settings,
        }
    }
}
