//! The tile query and mutation capability that map modifiers operate through.

use crate::settings::Climate;
use crate::tile::{ClearGround, Owner, Slope, TileIndex, TileKind, TreeGround, TropicZone};
use crate::tree::TreeType;

/// Query and mutation primitives of a world grid.
///
/// Implementations own tile storage and keep it consistent; callers only
/// ever see [`TileIndex`] values produced by [`TileGrid::tile_xy`].
///
/// Mutations assume the caller checked the tile kind first. They are
/// no-ops when applied to a tile of the wrong kind.
pub trait TileGrid {
    /// Number of tiles along the X axis.
    fn size_x(&self) -> u32;

    /// Number of tiles along the Y axis.
    fn size_y(&self) -> u32;

    /// Index of the tile at `(x, y)`.
    fn tile_xy(&self, x: u32, y: u32) -> TileIndex;

    /// Returns `true` for tiles that are not part of the map border.
    fn is_inner_tile(&self, tile: TileIndex) -> bool;

    /// Climate the map was created with.
    fn climate(&self) -> Climate;

    fn tile_kind(&self, tile: TileIndex) -> TileKind;

    fn slope(&self, tile: TileIndex) -> Slope;

    /// Height of the lowest corner.
    fn height(&self, tile: TileIndex) -> u8;

    fn owner(&self, tile: TileIndex) -> Owner;

    fn tropic_zone(&self, tile: TileIndex) -> TropicZone;

    /// Ground of a clear tile; `Snow` while snow covers it.
    fn clear_ground(&self, tile: TileIndex) -> Option<ClearGround>;

    /// Ground underneath the trees of a tree tile.
    fn tree_ground(&self, tile: TileIndex) -> Option<TreeGround>;

    /// Replaces ground and density of a clear tile.
    fn set_clear_ground_density(&mut self, tile: TileIndex, ground: ClearGround, density: u8);

    /// Replaces the ground under the trees of a tree tile.
    fn set_tree_ground_density(&mut self, tile: TileIndex, ground: TreeGround, density: u8);

    /// Turns any land tile into a clear tile, removing trees.
    fn make_clear(&mut self, tile: TileIndex, ground: ClearGround, density: u8);

    /// Covers a clear tile with snow, keeping rough ground rough underneath.
    fn make_snow(&mut self, tile: TileIndex, density: u8);

    /// Turns a land tile into a farm field of the given type.
    fn make_field(&mut self, tile: TileIndex, field_type: u8);

    fn make_canal(&mut self, tile: TileIndex, owner: Owner, random_bits: u32);

    fn make_river(&mut self, tile: TileIndex, random_bits: u32);

    fn make_sea(&mut self, tile: TileIndex);

    fn set_tropic_zone(&mut self, tile: TileIndex, zone: TropicZone);

    /// Whether new trees may be planted on this tile.
    fn can_plant_trees(&self, tile: TileIndex, allow_desert: bool) -> bool;

    /// Plants `count + 1` trees of `species` at growth stage `growth`.
    fn plant_trees(&mut self, tile: TileIndex, species: TreeType, count: u8, growth: u8);

    /// Picks a species suited to the tile from 8 bits of randomness.
    ///
    /// May return [`TreeType::INVALID`] when nothing should grow.
    fn random_tree_type(&self, tile: TileIndex, seed: u8) -> TreeType;
}
