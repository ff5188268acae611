//! # Terrain Generation Module
//!
//! This module provides the Perlin-noise terrain function that populates new
//! chunks. Generation is a pure function of the generator's configuration and
//! the chunk's world-space offset: the same inputs always produce the same
//! grid, and adjacent chunks sample the same continuous noise field because
//! offsets are world-space values, never reset per chunk.

use noise::{NoiseFn, Perlin};

use super::block::BlockType;
use crate::config::EngineConfig;

/// Generates chunk block grids from 2D coherent noise.
///
/// Each column `(x, z)` gets a height of `noise * amplitude + base_height`
/// blocks of `DIRT`, with `AIR` above. The `noise` crate's Perlin function has
/// codomain [-1, 1]; the sample is remapped to [0, 1] before the height
/// formula so the per-column fill count stays within
/// `[base_height, base_height + amplitude]`.
pub struct TerrainGenerator {
    perlin: Perlin,
    width: usize,
    height: usize,
    frequency: f64,
    amplitude: f64,
    base_height: f64,
}

impl TerrainGenerator {
    /// Creates a terrain generator from the engine configuration.
    pub fn new(config: &EngineConfig) -> Self {
        TerrainGenerator {
            perlin: Perlin::new(config.terrain.seed),
            width: config.chunk_width,
            height: config.chunk_height,
            frequency: config.terrain.frequency,
            amplitude: config.terrain.amplitude,
            base_height: config.terrain.base_height,
        }
    }

    /// Generates a dense block grid for a chunk at the given world offset.
    ///
    /// # Arguments
    /// * `x_offset` - World-space x offset of the chunk origin
    /// * `z_offset` - World-space z offset of the chunk origin
    ///
    /// # Returns
    /// A `width * height * width` grid in (x, y, z) row-major order, suitable
    /// for [`crate::voxels::chunk::ChunkData::from_blocks`].
    pub fn generate(&self, x_offset: f32, z_offset: f32) -> Vec<BlockType> {
        let mut blocks = vec![BlockType::AIR; self.width * self.height * self.width];

        for x in 0..self.width {
            for z in 0..self.width {
                let column_height = self.column_height(
                    (x as f64 + x_offset as f64) * self.frequency,
                    (z as f64 + z_offset as f64) * self.frequency,
                );

                for y in 0..column_height.min(self.height) {
                    blocks[(x * self.height + y) * self.width + z] = BlockType::DIRT;
                }
            }
        }

        blocks
    }

    /// Number of solid cells at the bottom of the column sampled at the given
    /// noise coordinates. A non-positive height yields an all-air column; no
    /// other lower clamping is applied.
    fn column_height(&self, noise_x: f64, noise_z: f64) -> usize {
        let sample = self.perlin.get([noise_x, noise_z]);
        let normalized = sample * 0.5 + 0.5;
        let height = (normalized * self.amplitude + self.base_height).floor();
        if height <= 0.0 {
            0
        } else {
            height as usize
        }
    }
}
