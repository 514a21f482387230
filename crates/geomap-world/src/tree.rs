//! Tree species identifiers across all climates.

use serde::{Deserialize, Serialize};

/// Tree species.
///
/// Species of each climate occupy a contiguous block; the associated
/// `*_COUNT` constants give the size of each block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TreeType(pub u8);

impl TreeType {
    pub const TEMPERATE: TreeType = TreeType(0x00);
    pub const SUB_ARCTIC: TreeType = TreeType(0x0C);
    /// Trees of the rainforest zone of the tropic climate.
    pub const RAINFOREST: TreeType = TreeType(0x14);
    /// The cactus growing in the desert zone of the tropic climate.
    pub const CACTUS: TreeType = TreeType(0x1B);
    /// Trees of the normal zone of the tropic climate.
    pub const SUB_TROPICAL: TreeType = TreeType(0x1C);
    pub const TOYLAND: TreeType = TreeType(0x20);
    pub const INVALID: TreeType = TreeType(0xFF);

    pub const TEMPERATE_COUNT: u8 = Self::SUB_ARCTIC.0 - Self::TEMPERATE.0;
    pub const SUB_ARCTIC_COUNT: u8 = Self::RAINFOREST.0 - Self::SUB_ARCTIC.0;
    pub const RAINFOREST_COUNT: u8 = Self::CACTUS.0 - Self::RAINFOREST.0;
    pub const SUB_TROPICAL_COUNT: u8 = Self::TOYLAND.0 - Self::SUB_TROPICAL.0;
    pub const TOYLAND_COUNT: u8 = 9;

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    /// Offsets `base` by `index`, producing the `index`-th species of a block.
    ///
    /// Past the last species this is [`TreeType::INVALID`].
    pub fn offset(base: TreeType, index: u8) -> TreeType {
        base.0.checked_add(index).map_or(Self::INVALID, TreeType)
    }
}
