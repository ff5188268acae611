//! # Chunk Module
//!
//! This module provides the `ChunkData` struct, the authoritative storage for
//! one chunk's blocks.
//!
//! ## Storage
//!
//! A chunk is a dense `width × height × width` grid of [`BlockType`] values,
//! stored as a single flat vector in (x, y, z) row-major order. The grid is
//! always fully allocated and fully populated for the lifetime of the chunk;
//! there are no sparse or lazily-created cells. Blocks have no identity beyond
//! their grid slot, so the flat array is the whole data structure.

use cgmath::{Point2, Point3};

use super::block::BlockType;

/// A fixed-size column of voxel blocks, the unit of loading and meshing.
///
/// Local coordinates are `x, z ∈ [0, width)` and `y ∈ [0, height)`. Passing an
/// out-of-range local coordinate to [`ChunkData::block_at`] or
/// [`ChunkData::set_block`] is a caller bug in coordinate resolution and
/// panics; callers that need the "missing neighbor is air" policy resolve it
/// before indexing (see [`crate::meshing::mesher`]).
pub struct ChunkData {
    /// The position of this chunk in chunk-grid coordinates (chunk units, not
    /// block units).
    pub position: Point2<i32>,

    width: usize,
    height: usize,
    blocks: Vec<BlockType>,
}

impl ChunkData {
    /// Creates a new chunk with every cell set to `AIR`.
    ///
    /// # Arguments
    /// * `position` - The chunk-grid coordinates of the new chunk
    /// * `width` - Horizontal dimension in blocks (both x and z)
    /// * `height` - Vertical dimension in blocks
    pub fn new(position: Point2<i32>, width: usize, height: usize) -> Self {
        ChunkData {
            position,
            width,
            height,
            blocks: vec![BlockType::AIR; width * height * width],
        }
    }

    /// Wraps an already-generated block grid into a chunk.
    ///
    /// # Arguments
    /// * `position` - The chunk-grid coordinates of the new chunk
    /// * `width` - Horizontal dimension in blocks (both x and z)
    /// * `height` - Vertical dimension in blocks
    /// * `blocks` - Dense grid in (x, y, z) row-major order
    ///
    /// # Panics
    /// Panics if `blocks` does not hold exactly `width * height * width`
    /// cells.
    pub fn from_blocks(
        position: Point2<i32>,
        width: usize,
        height: usize,
        blocks: Vec<BlockType>,
    ) -> Self {
        assert_eq!(
            blocks.len(),
            width * height * width,
            "block grid size does not match chunk dimensions"
        );
        ChunkData {
            position,
            width,
            height,
            blocks,
        }
    }

    /// The horizontal dimension of this chunk in blocks.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The vertical dimension of this chunk in blocks.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the local coordinate lies inside this chunk's grid.
    pub fn contains_local(&self, local: Point3<i32>) -> bool {
        local.x >= 0
            && (local.x as usize) < self.width
            && local.y >= 0
            && (local.y as usize) < self.height
            && local.z >= 0
            && (local.z as usize) < self.width
    }

    /// Gets the block at the specified chunk-local coordinates.
    ///
    /// # Panics
    /// Panics if the coordinate is outside the chunk's grid.
    pub fn block_at(&self, local: Point3<i32>) -> BlockType {
        self.blocks[self.index(local)]
    }

    /// Sets the block at the specified chunk-local coordinates.
    ///
    /// This only mutates the grid; triggering the mesh rebuild that makes the
    /// edit visible is the responsibility of [`crate::voxels::world::World`].
    ///
    /// # Panics
    /// Panics if the coordinate is outside the chunk's grid.
    pub fn set_block(&mut self, local: Point3<i32>, block: BlockType) {
        let index = self.index(local);
        self.blocks[index] = block;
    }

    fn index(&self, local: Point3<i32>) -> usize {
        assert!(
            self.contains_local(local),
            "local block coordinate {:?} outside chunk grid {}x{}x{}",
            local,
            self.width,
            self.height,
            self.width
        );
        (local.x as usize * self.height + local.y as usize) * self.width + local.z as usize
    }
}
