//! # World Module
//!
//! This module provides the `World` struct, the owner of every loaded chunk
//! and the single entry point for block edits.
//!
//! ## Architecture
//!
//! The world holds an explicit chunk map (chunk-grid coordinate → chunk data)
//! plus the current mesh for each chunk. It is constructed once with its
//! configuration, populated by [`World::load_all`], and mutated only through
//! its methods; there is no ambient global chunk state.
//!
//! ## Data Flow
//!
//! 1. `load_all` generates every chunk of the configured region through the
//!    terrain generator, then builds each chunk's initial mesh
//! 2. An edit request arrives as a world-space block coordinate
//! 3. The world resolves the owning chunk and local coordinate (flooring
//!    division, so negative coordinates resolve correctly), mutates the
//!    chunk's grid, and triggers one full mesh rebuild for that chunk
//!
//! Everything here is synchronous and single-threaded; a rebuild runs to
//! completion before the edit call returns.

use std::collections::HashMap;

use cgmath::{Point2, Point3};
use log::{debug, info};
use thiserror::Error;

use super::block::BlockType;
use super::chunk::ChunkData;
use super::terrain::TerrainGenerator;
use crate::config::EngineConfig;
use crate::meshing::{build_chunk_mesh, BlockResolver, ChunkMesh};

/// Errors reported by world block edits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    /// The block's owning chunk is not in the chunk map. The caller decides
    /// whether to ignore or surface this; the world state is unchanged.
    #[error("no chunk loaded at {chunk:?} for block {block:?}")]
    UnknownChunk {
        /// Chunk-grid coordinate that was not loaded.
        chunk: Point2<i32>,
        /// The world-space block coordinate of the rejected edit.
        block: Point3<i32>,
    },
}

/// A voxel world composed of chunks on a 2D chunk grid.
///
/// Within the initially loaded region the chunk map has no holes, so every
/// in-range neighbor lookup from a loaded chunk finds its chunk; lookups
/// outside the region come back absent and are treated as air by the mesher.
pub struct World {
    config: EngineConfig,
    terrain: TerrainGenerator,
    chunks: HashMap<Point2<i32>, ChunkData>,
    meshes: HashMap<Point2<i32>, ChunkMesh>,
}

/// Read-only view of the chunk map used as the mesher's neighbor capability.
struct LoadedChunks<'a>(&'a HashMap<Point2<i32>, ChunkData>);

impl BlockResolver for LoadedChunks<'_> {
    fn block_in_chunk(&self, chunk: Point2<i32>, local: Point3<i32>) -> Option<BlockType> {
        self.0.get(&chunk).map(|chunk| chunk.block_at(local))
    }
}

impl World {
    /// Creates a new, empty world with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        let terrain = TerrainGenerator::new(&config);
        World {
            config,
            terrain,
            chunks: HashMap::new(),
            meshes: HashMap::new(),
        }
    }

    /// The configuration this world was constructed with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates and meshes the configured rectangular region of chunks.
    ///
    /// Runs in two passes: first every chunk's block grid is generated from
    /// its world-space offset (`chunk * width * block_scale`), then every
    /// initial mesh is built. Meshing only after all chunks exist means
    /// boundary faces between loaded chunks cull correctly from the start.
    pub fn load_all(&mut self) {
        let world_size = self.config.chunk_width as f32 * self.config.block_scale;

        for x in 0..self.config.world_chunks_x {
            for z in 0..self.config.world_chunks_z {
                let position = Point2::new(x, z);
                let x_offset = x as f32 * world_size;
                let z_offset = z as f32 * world_size;

                let blocks = self.terrain.generate(x_offset, z_offset);
                let chunk = ChunkData::from_blocks(
                    position,
                    self.config.chunk_width,
                    self.config.chunk_height,
                    blocks,
                );
                self.chunks.insert(position, chunk);
            }
        }
        info!(
            "generated {} chunks ({}x{})",
            self.chunks.len(),
            self.config.world_chunks_x,
            self.config.world_chunks_z
        );

        let positions: Vec<Point2<i32>> = self.chunks.keys().copied().collect();
        for position in positions {
            self.rebuild_chunk_mesh(position);
        }
        info!("built {} initial chunk meshes", self.meshes.len());
    }

    /// Resolves a world-space block coordinate to its owning chunk and the
    /// local coordinate within that chunk.
    ///
    /// Division floors toward negative infinity: block x = -1 with chunk
    /// width 10 resolves to chunk -1, local 9, never chunk 0, local -1. The
    /// vertical coordinate passes through unchanged.
    pub fn chunk_containing(&self, block: Point3<i32>) -> (Point2<i32>, Point3<i32>) {
        let width = self.config.chunk_width as i32;
        let chunk = Point2::new(block.x.div_euclid(width), block.z.div_euclid(width));
        let local = Point3::new(block.x.rem_euclid(width), block.y, block.z.rem_euclid(width));
        (chunk, local)
    }

    /// Returns the block at a world-space coordinate.
    ///
    /// An absent owning chunk or an out-of-range vertical coordinate yields
    /// `AIR`, not an error.
    pub fn get_block(&self, block: Point3<i32>) -> BlockType {
        if block.y < 0 || block.y >= self.config.chunk_height as i32 {
            return BlockType::AIR;
        }

        let (chunk, local) = self.chunk_containing(block);
        match self.chunks.get(&chunk) {
            Some(chunk) => chunk.block_at(local),
            None => BlockType::AIR,
        }
    }

    /// Sets the block at a world-space coordinate and rebuilds the owning
    /// chunk's mesh.
    ///
    /// Placement and removal are the same operation: removal is
    /// `set_block(p, BlockType::AIR)`. Each successful edit triggers exactly
    /// one full mesh rebuild, of the owning chunk only.
    ///
    /// # Errors
    /// [`WorldError::UnknownChunk`] if the owning chunk is not loaded; the
    /// world is left unchanged.
    pub fn set_block(&mut self, block: Point3<i32>, block_type: BlockType) -> Result<(), WorldError> {
        let (chunk_position, local) = self.chunk_containing(block);

        let chunk = self
            .chunks
            .get_mut(&chunk_position)
            .ok_or(WorldError::UnknownChunk {
                chunk: chunk_position,
                block,
            })?;
        chunk.set_block(local, block_type);

        debug!(
            "set block {:?} = {:?} in chunk {:?}, rebuilding mesh",
            block, block_type, chunk_position
        );
        self.rebuild_chunk_mesh(chunk_position);
        Ok(())
    }

    /// Returns the chunk at a chunk-grid coordinate, if loaded.
    pub fn chunk_at(&self, position: Point2<i32>) -> Option<&ChunkData> {
        self.chunks.get(&position)
    }

    /// Returns the current mesh of the chunk at a chunk-grid coordinate, if
    /// loaded.
    pub fn mesh_at(&self, position: Point2<i32>) -> Option<&ChunkMesh> {
        self.meshes.get(&position)
    }

    /// Number of loaded chunks.
    pub fn loaded_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Iterates the chunk-grid coordinates of all loaded chunks.
    pub fn chunk_positions(&self) -> impl Iterator<Item = Point2<i32>> + '_ {
        self.chunks.keys().copied()
    }

    /// Rebuilds the full mesh of one chunk, discarding the previous mesh.
    fn rebuild_chunk_mesh(&mut self, position: Point2<i32>) {
        let Some(chunk) = self.chunks.get(&position) else {
            return;
        };
        let mesh = build_chunk_mesh(chunk, &LoadedChunks(&self.chunks), self.config.block_scale);
        self.meshes.insert(position, mesh);
    }
}

/// Converts a continuous world-space point to the integer coordinate of the
/// block containing it.
///
/// This is the shared flooring conversion used by the interaction
/// collaborator after offsetting a raycast hit by half a block along the hit
/// normal; the core only ever sees the resulting integer coordinate.
pub fn block_containing_point(point: Point3<f32>, block_scale: f32) -> Point3<i32> {
    Point3::new(
        (point.x / block_scale).floor() as i32,
        (point.y / block_scale).floor() as i32,
        (point.z / block_scale).floor() as i32,
    )
}
