//! # Configuration Module
//!
//! Fixed engine constants (chunk dimensions, block scale, load region, terrain
//! parameters) treated as injected configuration rather than hardcoded
//! literals. Every core path reads these values from an [`EngineConfig`]
//! handed to it at construction time.
//!
//! Configuration can be loaded from a JSON file or built from
//! [`EngineConfig::default`], which supplies the reference constants.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading configuration from a file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file was not valid JSON for [`EngineConfig`].
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parameters of the column-height terrain function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Seed for the Perlin noise source.
    pub seed: u32,

    /// Scale applied to world-space offsets before sampling the noise field.
    pub frequency: f64,

    /// Height range contributed by the noise sample, in blocks.
    ///
    /// The noise sample is remapped to [0, 1] before this is applied, so a
    /// column's height always lands in `[base_height, base_height + amplitude]`.
    pub amplitude: f64,

    /// Minimum height of every column, in blocks.
    pub base_height: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig {
            seed: 0,
            frequency: 0.2,
            amplitude: 5.0,
            base_height: 10.0,
        }
    }
}

/// Fixed configuration consumed by the voxel core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Horizontal chunk dimension in blocks (x and z).
    pub chunk_width: usize,

    /// Vertical chunk dimension in blocks.
    pub chunk_height: usize,

    /// World-space size of one block edge.
    pub block_scale: f32,

    /// Number of chunks loaded along the x axis of the initial load region.
    pub world_chunks_x: i32,

    /// Number of chunks loaded along the z axis of the initial load region.
    pub world_chunks_z: i32,

    /// Terrain-generation parameters.
    pub terrain: TerrainConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            chunk_width: 10,
            chunk_height: 128,
            block_scale: 0.5,
            world_chunks_x: 10,
            world_chunks_z: 10,
            terrain: TerrainConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to a JSON file matching the [`EngineConfig`] shape
    ///
    /// # Returns
    /// The parsed configuration, or a [`ConfigError`] describing what failed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
