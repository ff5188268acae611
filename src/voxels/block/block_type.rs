//! # Block Type Module
//!
//! This module defines the different types of blocks in the voxel world.
//! Block types are plain value tags: a block has no identity beyond its grid
//! slot, so equality and hashing are by value.

use serde::{Deserialize, Serialize};

/// Enumerates all possible block types in the voxel world.
///
/// `AIR` is the distinguished empty value: any block face adjacent to `AIR`
/// is rendered, and any face adjacent to a solid block is culled. New solid
/// types only need a variant here plus an atlas entry in
/// [`crate::meshing::atlas`].
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    /// An air block, non-solid and never meshed.
    AIR,

    /// A basic dirt block with distinct top/side/bottom textures.
    DIRT,

    /// A stone block with a single texture on all sides.
    STONE,
}

impl BlockType {
    /// Returns `true` if this block is the empty `AIR` value.
    pub const fn is_air(self) -> bool {
        matches!(self, BlockType::AIR)
    }

    /// Returns `true` if this block occupies its cell and occludes
    /// neighboring faces.
    pub const fn is_solid(self) -> bool {
        !self.is_air()
    }
}
